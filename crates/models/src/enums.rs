//! Enumerated columns, stored and serialized as their upper-case names.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    #[sea_orm(string_value = "SALE")]
    Sale,
    #[sea_orm(string_value = "FREE")]
    Free,
    #[sea_orm(string_value = "RENT")]
    Rent,
}

impl PaymentType {
    /// Sale and rent listings must carry a positive base price.
    pub fn requires_price(self) -> bool {
        matches!(self, PaymentType::Sale | PaymentType::Rent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowType {
    /// No escrow protection.
    #[sea_orm(string_value = "NOP")]
    Nop,
    /// Mutually assured destruction: both sides lock a deposit.
    #[sea_orm(string_value = "MAD")]
    Mad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    #[sea_orm(string_value = "BITCOIN")]
    Bitcoin,
    #[sea_orm(string_value = "PARTICL")]
    Particl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CryptocurrencyAddressType {
    #[sea_orm(string_value = "NORMAL")]
    Normal,
    #[sea_orm(string_value = "STEALTH")]
    Stealth,
}
