use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use service::catalog::CatalogService;

use crate::errors::ApiError;

pub mod categories;
pub mod news;
pub mod root;

/// Shared handler state; the catalog service is injected once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
}

impl ServerState {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}

/// Upper bound for request bodies read by the handlers.
pub(crate) const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Buffer a request body; anything unreadable or over [`BODY_LIMIT`] is a 400.
pub(crate) async fn read_body(body: Body) -> Result<Bytes, ApiError> {
    to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Decode a JSON request body, turning any decoder failure into a 400.
pub(crate) fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Paths without an explicit route are dispatched by prefix: everything under
/// `/categories/` belongs to the news handler, anything else gets the greeting.
async fn by_prefix(state: State<ServerState>, req: Request) -> Response {
    if req.uri().path().starts_with("/categories/") {
        news::handle(state, req).await.into_response()
    } else {
        root::hello().await.into_response()
    }
}

/// Build the application router: root, categories and category-scoped news.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    Router::new()
        .route("/", any(root::hello))
        .route("/categories", any(categories::handle))
        .fallback(by_prefix)
        .with_state(state)
        // 处理器 panic 时返回 500，而不是直接断开连接
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
