//! Create `item_price` table, the one-to-many child of payment information.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemPrice::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemPrice::Id))
                    .col(string_len(ItemPrice::Currency, 16).not_null())
                    .col(double(ItemPrice::BasePrice).not_null())
                    .col(integer(ItemPrice::PaymentInformationId).not_null())
                    .col(timestamp_with_time_zone(ItemPrice::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ItemPrice::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_price_payment_information")
                            .from(ItemPrice::Table, ItemPrice::PaymentInformationId)
                            .to(PaymentInformation::Table, PaymentInformation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_price_payment_information")
                    .table(ItemPrice::Table)
                    .col(ItemPrice::PaymentInformationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ItemPrice::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ItemPrice {
    Table,
    Id,
    Currency,
    BasePrice,
    PaymentInformationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PaymentInformation { Table, Id }
