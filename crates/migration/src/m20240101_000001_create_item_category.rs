//! Create `item_category` table.
//! Categories form a tree through a self-referencing parent key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemCategory::Id))
                    .col(ColumnDef::new(ItemCategory::Key).string_len(100).null().unique_key())
                    .col(string_len(ItemCategory::Name, 100).not_null())
                    .col(ColumnDef::new(ItemCategory::Description).text().null())
                    .col(ColumnDef::new(ItemCategory::ParentItemCategoryId).integer().null())
                    .col(timestamp_with_time_zone(ItemCategory::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ItemCategory::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_category_parent")
                            .from(ItemCategory::Table, ItemCategory::ParentItemCategoryId)
                            .to(ItemCategory::Table, ItemCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_category_parent")
                    .table(ItemCategory::Table)
                    .col(ItemCategory::ParentItemCategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ItemCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ItemCategory {
    Table,
    Id,
    Key,
    Name,
    Description,
    ParentItemCategoryId,
    CreatedAt,
    UpdatedAt,
}
