use async_trait::async_trait;

use super::domain::{Category, NewsItem};
use crate::errors::ServiceError;

/// Persistence gateway for the catalog. Implementations own their own
/// transactional discipline; callers never lock around these calls.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All categories in storage order.
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;
    async fn create_category(&self, name: &str) -> Result<Category, ServiceError>;
    async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError>;

    async fn list_news(&self, category_id: i32) -> Result<Vec<NewsItem>, ServiceError>;
    async fn find_news(&self, category_id: i32, news_id: i32) -> Result<Option<NewsItem>, ServiceError>;
    /// Fails with [`ServiceError::NotFound`] when `category_id` has no category.
    async fn create_news(&self, category_id: i32, title: &str, description: &str) -> Result<NewsItem, ServiceError>;
}

/// In-memory repository for tests and local runs without Postgres.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Tables {
        categories: BTreeMap<i32, Category>, // key: id
        news: BTreeMap<i32, NewsItem>,       // key: id
        last_category_id: i32,
        last_news_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryCatalogRepository {
        tables: Mutex<Tables>,
    }

    impl InMemoryCatalogRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl CatalogRepository for InMemoryCatalogRepository {
        async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
            let tables = self.tables.lock().await;
            Ok(tables.categories.values().cloned().collect())
        }

        async fn create_category(&self, name: &str) -> Result<Category, ServiceError> {
            let mut tables = self.tables.lock().await;
            tables.last_category_id += 1;
            let category = Category { id: tables.last_category_id, name: name.to_string() };
            tables.categories.insert(category.id, category.clone());
            Ok(category)
        }

        async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
            let tables = self.tables.lock().await;
            Ok(tables.categories.get(&id).cloned())
        }

        async fn list_news(&self, category_id: i32) -> Result<Vec<NewsItem>, ServiceError> {
            let tables = self.tables.lock().await;
            Ok(tables.news.values().filter(|n| n.category_id == category_id).cloned().collect())
        }

        async fn find_news(&self, category_id: i32, news_id: i32) -> Result<Option<NewsItem>, ServiceError> {
            let tables = self.tables.lock().await;
            Ok(tables.news.get(&news_id).filter(|n| n.category_id == category_id).cloned())
        }

        async fn create_news(&self, category_id: i32, title: &str, description: &str) -> Result<NewsItem, ServiceError> {
            let mut tables = self.tables.lock().await;
            if !tables.categories.contains_key(&category_id) {
                return Err(ServiceError::not_found("category"));
            }
            tables.last_news_id += 1;
            let item = NewsItem {
                id: tables.last_news_id,
                title: title.to_string(),
                description: description.to_string(),
                category_id,
            };
            tables.news.insert(item.id, item.clone());
            Ok(item)
        }
    }

}
