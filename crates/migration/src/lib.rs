//! Migrator registering entity-specific migrations in dependency order.
//! Parents are created before the tables holding foreign keys to them.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_item_category;
mod m20240101_000002_create_payment_information;
mod m20240101_000003_create_escrow;
mod m20240101_000004_create_escrow_ratio;
mod m20240101_000005_create_item_price;
mod m20240101_000006_create_shipping_price;
mod m20240101_000007_create_cryptocurrency_address;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_item_category::Migration),
            Box::new(m20240101_000002_create_payment_information::Migration),
            Box::new(m20240101_000003_create_escrow::Migration),
            Box::new(m20240101_000004_create_escrow_ratio::Migration),
            Box::new(m20240101_000005_create_item_price::Migration),
            Box::new(m20240101_000006_create_shipping_price::Migration),
            Box::new(m20240101_000007_create_cryptocurrency_address::Migration),
        ]
    }
}
