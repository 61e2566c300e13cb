use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EscrowRatio::Table)
                    .if_not_exists()
                    .col(pk_auto(EscrowRatio::Id))
                    .col(double(EscrowRatio::Buyer).not_null())
                    .col(double(EscrowRatio::Seller).not_null())
                    .col(integer(EscrowRatio::EscrowId).not_null())
                    .col(timestamp_with_time_zone(EscrowRatio::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(EscrowRatio::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_escrow_ratio_escrow")
                            .from(EscrowRatio::Table, EscrowRatio::EscrowId)
                            .to(Escrow::Table, Escrow::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_escrow_ratio_escrow_unique")
                    .table(EscrowRatio::Table)
                    .col(EscrowRatio::EscrowId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EscrowRatio::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EscrowRatio {
    Table,
    Id,
    Buyer,
    Seller,
    EscrowId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Escrow { Table, Id }
