//! Create `cryptocurrency_address` table, the payout address of an item price.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CryptocurrencyAddress::Table)
                    .if_not_exists()
                    .col(pk_auto(CryptocurrencyAddress::Id))
                    .col(string_len(CryptocurrencyAddress::Type, 16).not_null())
                    .col(string_len(CryptocurrencyAddress::Address, 256).not_null())
                    .col(integer(CryptocurrencyAddress::ItemPriceId).not_null())
                    .col(timestamp_with_time_zone(CryptocurrencyAddress::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CryptocurrencyAddress::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cryptocurrency_address_item_price")
                            .from(CryptocurrencyAddress::Table, CryptocurrencyAddress::ItemPriceId)
                            .to(ItemPrice::Table, ItemPrice::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cryptocurrency_address_item_price_unique")
                    .table(CryptocurrencyAddress::Table)
                    .col(CryptocurrencyAddress::ItemPriceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CryptocurrencyAddress::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CryptocurrencyAddress {
    Table,
    Id,
    Type,
    Address,
    ItemPriceId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ItemPrice { Table, Id }
