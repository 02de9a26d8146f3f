use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::{catalog::domain::NewNewsItem, errors::ServiceError};
use tracing::debug;

use crate::errors::ApiError;
use crate::router::ResourcePath;
use crate::routes::{decode_json, read_body, ServerState};

/// `/categories/...`: GET reads news, POST adds news to the category in the
/// third path segment, anything else is 405.
pub async fn handle(State(state): State<ServerState>, req: Request) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path();
    debug!(method = %parts.method, path, "news request");

    match parts.method {
        Method::GET => get(&state, ResourcePath::parse(path)).await,
        Method::POST => {
            let category_id = ResourcePath::scoped_category_id(path).map_err(|_| ApiError::InvalidCategoryId)?;
            create(&state, category_id, body).await
        }
        _ => Err(ApiError::MethodNotAllowed),
    }
}

async fn get(state: &ServerState, resource: ResourcePath) -> Result<Response, ApiError> {
    match resource {
        ResourcePath::NewsCollection { category_id } => {
            let category_id = category_id.map_err(|_| ApiError::InvalidCategoryId)?;
            let items = state.catalog.list_news(category_id).await?;
            Ok(Json(items).into_response())
        }
        ResourcePath::NewsItem { category_id: Ok(category_id), news_id: Ok(news_id) } => {
            match state.catalog.get_news(category_id, news_id).await? {
                Some(item) => Ok(Json(item).into_response()),
                None => Err(ApiError::NewsNotFound { category_id, news_id }),
            }
        }
        ResourcePath::NewsItem { .. } => Err(ApiError::InvalidIds),
        ResourcePath::Root | ResourcePath::Categories | ResourcePath::Invalid => Err(ApiError::InvalidRequest),
    }
}

async fn create(state: &ServerState, category_id: i32, body: Body) -> Result<Response, ApiError> {
    // Unknown category wins over a bad or oversized body, so it is checked before reading
    if state.catalog.find_category(category_id).await?.is_none() {
        return Err(ApiError::CategoryNotFound(category_id));
    }
    let body = read_body(body).await?;
    let input: NewNewsItem = decode_json(&body)?;
    let created = state
        .catalog
        .create_news(category_id, input)
        .await
        .map_err(|e| match e {
            ServiceError::NotFound(_) => ApiError::CategoryNotFound(category_id),
            other => ApiError::Internal(other),
        })?;
    Ok((
        StatusCode::CREATED,
        format!("News added with ID: {} to category ID: {}", created.id, category_id),
    )
        .into_response())
}
