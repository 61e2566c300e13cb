//! Create `escrow` table. At most one escrow per payment information.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Escrow::Table)
                    .if_not_exists()
                    .col(pk_auto(Escrow::Id))
                    .col(string_len(Escrow::Type, 16).not_null())
                    .col(integer(Escrow::PaymentInformationId).not_null())
                    .col(timestamp_with_time_zone(Escrow::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Escrow::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_escrow_payment_information")
                            .from(Escrow::Table, Escrow::PaymentInformationId)
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
                    .name("idx_escrow_payment_information_unique")
                    .table(Escrow::Table)
                    .col(Escrow::PaymentInformationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Escrow::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Escrow {
    Table,
    Id,
    Type,
    PaymentInformationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PaymentInformation { Table, Id }
