use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShippingPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(ShippingPrice::Id))
                    .col(double(ShippingPrice::Domestic).not_null())
                    .col(double(ShippingPrice::International).not_null())
                    .col(integer(ShippingPrice::ItemPriceId).not_null())
                    .col(timestamp_with_time_zone(ShippingPrice::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ShippingPrice::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipping_price_item_price")
                            .from(ShippingPrice::Table, ShippingPrice::ItemPriceId)
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
                    .name("idx_shipping_price_item_price_unique")
                    .table(ShippingPrice::Table)
                    .col(ShippingPrice::ItemPriceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ShippingPrice::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ShippingPrice {
    Table,
    Id,
    Domestic,
    International,
    ItemPriceId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ItemPrice { Table, Id }
