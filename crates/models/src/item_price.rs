use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::enums::Currency;
use crate::{cryptocurrency_address, errors, payment_information, shipping_price};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_price")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub currency: Currency,
    pub base_price: f64,
    pub payment_information_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PaymentInformation,
    ShippingPrice,
    Address,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PaymentInformation => Entity::belongs_to(payment_information::Entity)
                .from(Column::PaymentInformationId)
                .to(payment_information::Column::Id)
                .into(),
            Relation::ShippingPrice => Entity::has_one(shipping_price::Entity).into(),
            Relation::Address => Entity::has_one(cryptocurrency_address::Entity).into(),
        }
    }
}

impl Related<payment_information::Entity> for Entity {
    fn to() -> RelationDef { Relation::PaymentInformation.def() }
}

impl Related<shipping_price::Entity> for Entity {
    fn to() -> RelationDef { Relation::ShippingPrice.def() }
}

impl Related<cryptocurrency_address::Entity> for Entity {
    fn to() -> RelationDef { Relation::Address.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemPriceValues {
    pub payment_information_id: i32,
    pub currency: Currency,
    pub base_price: f64,
}

impl ItemPriceValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_base_price(self.base_price)
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.payment_information_id = Set(self.payment_information_id);
        am.currency = Set(self.currency);
        am.base_price = Set(self.base_price);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}

/// Row-level check only; whether zero is allowed depends on the payment
/// type and is decided by the request validation.
pub fn validate_base_price(value: f64) -> Result<(), errors::ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(errors::ModelError::Validation("basePrice must be a non-negative number".into()));
    }
    Ok(())
}
