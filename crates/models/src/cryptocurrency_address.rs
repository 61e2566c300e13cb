use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::enums::CryptocurrencyAddressType;
use crate::{errors, item_price};

/// Address the buyer pays to for one item price.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cryptocurrency_address")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub address_type: CryptocurrencyAddressType,
    pub address: String,
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
pub struct CryptocurrencyAddressValues {
    pub item_price_id: i32,
    pub address_type: CryptocurrencyAddressType,
    pub address: String,
}

impl CryptocurrencyAddressValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_address(&self.address)
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.item_price_id = Set(self.item_price_id);
        am.address_type = Set(self.address_type);
        am.address = Set(self.address);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}

pub fn validate_address(address: &str) -> Result<(), errors::ModelError> {
    if address.trim().is_empty() {
        return Err(errors::ModelError::Validation("address required".into()));
    }
    if address.len() > 256 {
        return Err(errors::ModelError::Validation("address longer than 256 characters".into()));
    }
    Ok(())
}
