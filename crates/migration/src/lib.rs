//! Migrator registering entity-specific migrations in dependency order.
//! Every table is created `IF NOT EXISTS`, so running `Migrator::up` at start is idempotent.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_category;
mod m20240101_000002_create_news_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_category::Migration),
            // news_item references category
            Box::new(m20240101_000002_create_news_item::Migration),
        ]
    }
}
