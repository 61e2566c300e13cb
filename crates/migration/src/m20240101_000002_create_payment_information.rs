//! Create `payment_information` table, the root of the payment aggregate.
//! Listing items and templates live outside this schema, so their ids are
//! stored without foreign keys.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentInformation::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentInformation::Id))
                    .col(string_len(PaymentInformation::Type, 16).not_null())
                    .col(ColumnDef::new(PaymentInformation::ListingItemId).integer().null())
                    .col(ColumnDef::new(PaymentInformation::ListingItemTemplateId).integer().null())
                    .col(timestamp_with_time_zone(PaymentInformation::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(PaymentInformation::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_information_listing_item")
                    .table(PaymentInformation::Table)
                    .col(PaymentInformation::ListingItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payment_information_listing_item_template")
                    .table(PaymentInformation::Table)
                    .col(PaymentInformation::ListingItemTemplateId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PaymentInformation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PaymentInformation {
    Table,
    Id,
    Type,
    ListingItemId,
    ListingItemTemplateId,
    CreatedAt,
    UpdatedAt,
}
