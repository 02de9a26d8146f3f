use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::catalog::domain::NewCategory;
use tracing::debug;

use crate::errors::ApiError;
use crate::routes::{decode_json, read_body, ServerState};

/// `/categories`: GET lists, POST creates, anything else is 405.
pub async fn handle(State(state): State<ServerState>, req: Request) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();
    match parts.method {
        Method::GET => list(&state).await,
        Method::POST => {
            let body = read_body(body).await?;
            create(&state, &body).await
        }
        _ => Err(ApiError::MethodNotAllowed),
    }
}

async fn list(state: &ServerState) -> Result<Response, ApiError> {
    let categories = state.catalog.list_categories().await?;
    debug!(count = categories.len(), "list categories");
    Ok(Json(categories).into_response())
}

async fn create(state: &ServerState, body: &[u8]) -> Result<Response, ApiError> {
    let input: NewCategory = decode_json(body)?;
    let created = state.catalog.create_category(input).await?;
    Ok((StatusCode::CREATED, format!("Category added with ID: {}", created.id)).into_response())
}
