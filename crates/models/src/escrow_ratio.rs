use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, escrow};

/// Relative weighting of buyer and seller deposits in an escrow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "escrow_ratio")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub buyer: f64,
    pub seller: f64,
    pub escrow_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Escrow }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Escrow => Entity::belongs_to(escrow::Entity)
                .from(Column::EscrowId)
                .to(escrow::Column::Id)
                .into(),
        }
    }
}

impl Related<escrow::Entity> for Entity {
    fn to() -> RelationDef { Relation::Escrow.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct EscrowRatioValues {
    pub escrow_id: i32,
    pub buyer: f64,
    pub seller: f64,
}

impl EscrowRatioValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_weight("buyer", self.buyer)?;
        validate_weight("seller", self.seller)
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.escrow_id = Set(self.escrow_id);
        am.buyer = Set(self.buyer);
        am.seller = Set(self.seller);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}

pub fn validate_weight(field: &str, value: f64) -> Result<(), errors::ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(errors::ModelError::Validation(format!("{field} must be a non-negative number")));
    }
    Ok(())
}
