use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, item_price};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipping_price")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub domestic: f64,
    pub international: f64,
    pub item_price_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ItemPrice }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ItemPrice => Entity::belongs_to(item_price::Entity)
                .from(Column::ItemPriceId)
                .to(item_price::Column::Id)
                .into(),
        }
    }
}

impl Related<item_price::Entity> for Entity {
    fn to() -> RelationDef { Relation::ItemPrice.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct ShippingPriceValues {
    pub item_price_id: i32,
    pub domestic: f64,
    pub international: f64,
}

impl ShippingPriceValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_amount("domestic", self.domestic)?;
        validate_amount("international", self.international)
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.item_price_id = Set(self.item_price_id);
        am.domestic = Set(self.domestic);
        am.international = Set(self.international);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}

pub fn validate_amount(field: &str, value: f64) -> Result<(), errors::ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(errors::ModelError::Validation(format!("{field} must be a non-negative number")));
    }
    Ok(())
}
