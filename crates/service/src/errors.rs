use sea_orm::DbErr;
use thiserror::Error;

use crate::lookup::Lookup;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} not found: {lookup}")]
    NotFound { entity: &'static str, lookup: Lookup },
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, lookup: impl Into<Lookup>) -> Self {
        Self::NotFound { entity, lookup: lookup.into() }
    }

    /// Input problems the caller can fix and retry.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::Validation(_) | ServiceError::Model(models::errors::ModelError::Validation(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_lookup() {
        let e = ServiceError::not_found("payment_information", 7);
        assert_eq!(e.to_string(), "payment_information not found: id 7");
        match e {
            ServiceError::NotFound { lookup, .. } => assert_eq!(lookup, Lookup::ById(7)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn classifies_client_errors() {
        assert!(ServiceError::from(ValidationError::field("type", "is required")).is_client_error());
        assert!(ServiceError::from(models::errors::ModelError::Validation("x".into())).is_client_error());
        assert!(!ServiceError::not_found("item_category", "cat_x").is_client_error());
        assert!(!ServiceError::Db(DbErr::Custom("boom".into())).is_client_error());
    }
}
