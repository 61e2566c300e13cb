use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::enums::PaymentType;
use crate::{errors, escrow, item_price};

/// Root of the payment aggregate. Belongs to a listing item or a listing
/// item template, both of which live outside this schema.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_information")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub listing_item_id: Option<i32>,
    pub listing_item_template_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Escrow,
    ItemPrice,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Escrow => Entity::has_one(escrow::Entity).into(),
            Relation::ItemPrice => Entity::has_many(item_price::Entity).into(),
        }
    }
}

impl Related<escrow::Entity> for Entity {
    fn to() -> RelationDef { Relation::Escrow.def() }
}

impl Related<item_price::Entity> for Entity {
    fn to() -> RelationDef { Relation::ItemPrice.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable columns of a payment information row.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentInformationValues {
    pub payment_type: PaymentType,
    pub listing_item_id: Option<i32>,
    pub listing_item_template_id: Option<i32>,
}

impl PaymentInformationValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_parent(self.listing_item_id, self.listing_item_template_id)
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.payment_type = Set(self.payment_type);
        am.listing_item_id = Set(self.listing_item_id);
        am.listing_item_template_id = Set(self.listing_item_template_id);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}

/// Exactly one owner reference must be present.
pub fn validate_parent(listing_item_id: Option<i32>, listing_item_template_id: Option<i32>) -> Result<(), errors::ModelError> {
    match (listing_item_id, listing_item_template_id) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        (None, None) => Err(errors::ModelError::Validation(
            "listing_item_id or listing_item_template_id required".into(),
        )),
        (Some(_), Some(_)) => Err(errors::ModelError::Validation(
            "listing_item_id and listing_item_template_id are mutually exclusive".into(),
        )),
    }
}
