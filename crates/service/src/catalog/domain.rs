use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A news item as returned to clients. `category_id` is implied by the URL
/// and stays out of the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing)]
    pub category_id: i32,
}

/// Body of `POST /categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

/// Body of `POST /categories/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewNewsItem {
    pub title: String,
    pub description: String,
}

impl From<models::category::Model> for Category {
    fn from(m: models::category::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

impl From<models::news_item::Model> for NewsItem {
    fn from(m: models::news_item::Model) -> Self {
        Self { id: m.id, title: m.title, description: m.description, category_id: m.category_id }
    }
}
