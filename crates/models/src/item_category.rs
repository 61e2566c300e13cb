use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_category")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub key: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub parent_item_category_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Parent }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Parent => Entity::belongs_to(Entity)
                .from(Column::ParentItemCategoryId)
                .to(Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCategoryValues {
    pub key: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub parent_item_category_id: Option<i32>,
}

impl ItemCategoryValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_name(&self.name)?;
        if let Some(k) = &self.key { validate_key(k)?; }
        Ok(())
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.key = Set(self.key);
        am.name = Set(self.name);
        am.description = Set(self.description);
        am.parent_item_category_id = Set(self.parent_item_category_id);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if name.len() > 100 { return Err(errors::ModelError::Validation("name longer than 100 characters".into())); }
    Ok(())
}

/// Keys are stable identifiers such as `cat_electronics_audio`.
pub fn validate_key(key: &str) -> Result<(), errors::ModelError> {
    if key.is_empty() || key.len() > 100 {
        return Err(errors::ModelError::Validation("key must be 1..=100 characters".into()));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(errors::ModelError::Validation("key must not contain whitespace".into()));
    }
    Ok(())
}
