use std::sync::Arc;
use tracing::{info, instrument};

use crate::catalog::domain::{Category, NewCategory, NewNewsItem, NewsItem};
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Application service for categories and their news.
/// Handlers hold one shared instance; the repository is injected at construction.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self { Self { repo } }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        self.repo.list_categories().await
    }

    #[instrument(skip(self, input))]
    pub async fn create_category(&self, input: NewCategory) -> Result<Category, ServiceError> {
        let created = self.repo.create_category(&input.name).await?;
        info!(category_id = created.id, "category_created");
        Ok(created)
    }

    pub async fn find_category(&self, id: i32) -> Result<Option<Category>, ServiceError> {
        self.repo.find_category(id).await
    }

    /// News of a category. An unknown category is not an error, it just has no news.
    pub async fn list_news(&self, category_id: i32) -> Result<Vec<NewsItem>, ServiceError> {
        self.repo.list_news(category_id).await
    }

    pub async fn get_news(&self, category_id: i32, news_id: i32) -> Result<Option<NewsItem>, ServiceError> {
        self.repo.find_news(category_id, news_id).await
    }

    /// Add a news item to an existing category.
    #[instrument(skip(self, input))]
    pub async fn create_news(&self, category_id: i32, input: NewNewsItem) -> Result<NewsItem, ServiceError> {
        let created = self.repo.create_news(category_id, &input.title, &input.description).await?;
        info!(news_id = created.id, "news_created");
        Ok(created)
    }
}
