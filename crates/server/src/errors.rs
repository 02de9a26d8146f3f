use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Every failure a handler can produce. The `Display` text is the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid category ID")]
    InvalidCategoryId,
    #[error("Invalid category ID or news ID")]
    InvalidIds,
    #[error("Invalid request")]
    InvalidRequest,
    /// Body did not decode into the expected JSON shape; the detail is only logged.
    #[error("Invalid request body")]
    MalformedBody(String),
    #[error("Category with ID: {0} not found")]
    CategoryNotFound(i32),
    #[error("News with ID: {news_id} not found in category ID: {category_id}")]
    NewsNotFound { category_id: i32, news_id: i32 },
    #[error("")]
    MethodNotAllowed,
    #[error("Internal Server Error")]
    Internal(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCategoryId
            | ApiError::InvalidIds
            | ApiError::InvalidRequest
            | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::CategoryNotFound(_) | ApiError::NewsNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::MethodNotAllowed => {
                return (status, [(header::ALLOW, "GET, POST")]).into_response();
            }
            ApiError::MalformedBody(detail) => warn!(%detail, "request body rejected"),
            ApiError::Internal(e) => error!(error = %e, "request failed"),
            _ => {}
        }
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("schema migration failed: {0}")]
    Migration(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(e: ApiError) -> (StatusCode, String) {
        let resp = e.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn not_found_messages_name_the_ids() {
        let (status, body) = body_of(ApiError::NewsNotFound { category_id: 3, news_id: 9 }).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "News with ID: 9 not found in category ID: 3");

        let (status, body) = body_of(ApiError::CategoryNotFound(5)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Category with ID: 5 not found");
    }

    #[tokio::test]
    async fn method_not_allowed_has_empty_body() {
        let resp = ApiError::MethodNotAllowed.into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[header::ALLOW], "GET, POST");
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) = body_of(ApiError::Internal(ServiceError::Db("connection refused".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal Server Error");
    }

    #[tokio::test]
    async fn malformed_body_hides_decoder_detail() {
        let (status, body) = body_of(ApiError::MalformedBody("expected value at line 1".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid request body");
    }
}
