//! SeaORM entities for the marketplace catalogue and the payment aggregate.
//!
//! Each module holds one table: the entity, its relations, the `*Values`
//! struct carrying the writable columns, and row-level value checks.

pub mod errors;
pub mod db;
pub mod enums;
pub mod item_category;
pub mod payment_information;
pub mod escrow;
pub mod escrow_ratio;
pub mod item_price;
pub mod shipping_price;
pub mod cryptocurrency_address;

#[cfg(test)]
mod tests;
