use sea_orm::DatabaseConnection;

use crate::catalog::domain::{Category, NewsItem};
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        let rows = models::category::list(&self.db).await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn create_category(&self, name: &str) -> Result<Category, ServiceError> {
        Ok(models::category::create(&self.db, name).await?.into())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
        Ok(models::category::find(&self.db, id).await?.map(Category::from))
    }

    async fn list_news(&self, category_id: i32) -> Result<Vec<NewsItem>, ServiceError> {
        let rows = models::news_item::list_by_category(&self.db, category_id).await?;
        Ok(rows.into_iter().map(NewsItem::from).collect())
    }

    async fn find_news(&self, category_id: i32, news_id: i32) -> Result<Option<NewsItem>, ServiceError> {
        Ok(models::news_item::find_in_category(&self.db, category_id, news_id).await?.map(NewsItem::from))
    }

    async fn create_news(&self, category_id: i32, title: &str, description: &str) -> Result<NewsItem, ServiceError> {
        Ok(models::news_item::create(&self.db, category_id, title, description).await?.into())
    }
}
