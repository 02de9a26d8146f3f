//! Create `news_item` table.
//! News items are always addressed through their owning category.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsItem::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsItem::Id))
                    .col(string_len(NewsItem::Title, 255).not_null())
                    .col(string_len(NewsItem::Description, 255).not_null())
                    .col(integer(NewsItem::CategoryId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_item_category")
                            .from(NewsItem::Table, NewsItem::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing and composite lookups both filter by category
        manager
            .create_index(
                Index::create()
                    .name("idx_news_item_category")
                    .table(NewsItem::Table)
                    .col(NewsItem::CategoryId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(NewsItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum NewsItem {
    Table,
    Id,
    Title,
    Description,
    CategoryId,
}

#[derive(DeriveIden)]
enum Category { Table, Id }
