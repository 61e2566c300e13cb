use chrono::Utc;
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::enums::EscrowType;
use crate::{errors, escrow_ratio, payment_information};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "escrow")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub escrow_type: EscrowType,
    pub payment_information_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PaymentInformation,
    Ratio,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PaymentInformation => Entity::belongs_to(payment_information::Entity)
                .from(Column::PaymentInformationId)
                .to(payment_information::Column::Id)
                .into(),
            Relation::Ratio => Entity::has_one(escrow_ratio::Entity).into(),
        }
    }
}

impl Related<payment_information::Entity> for Entity {
    fn to() -> RelationDef { Relation::PaymentInformation.def() }
}

impl Related<escrow_ratio::Entity> for Entity {
    fn to() -> RelationDef { Relation::Ratio.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct EscrowValues {
    pub payment_information_id: i32,
    pub escrow_type: EscrowType,
}

impl EscrowValues {
    pub fn validate(&self) -> Result<(), errors::ModelError> { Ok(()) }

    pub fn apply(self, am: &mut ActiveModel) {
        am.payment_information_id = Set(self.payment_information_id);
        am.escrow_type = Set(self.escrow_type);
        am.updated_at = Set(Utc::now().into());
    }

    pub fn into_active_model(self) -> ActiveModel {
        let mut am = ActiveModel { created_at: Set(Utc::now().into()), ..Default::default() };
        self.apply(&mut am);
        am
    }
}
