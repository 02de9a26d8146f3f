use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::catalog::{repo::seaorm::SeaOrmCatalogRepository, CatalogService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind `[server]` host/port; host names are resolved.
pub async fn bind(cfg: &AppConfig) -> Result<tokio::net::TcpListener, StartupError> {
    let (host, port) = (cfg.server.host.as_str(), cfg.server.port);
    tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|source| StartupError::Bind { addr: format!("{host}:{port}"), source })
}

/// Build the router around an already constructed catalog service.
pub fn build_app(catalog: CatalogService) -> Router {
    routes::build_router(build_cors(), ServerState::new(catalog))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: connect the database, ensure the schema, then serve HTTP until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // DB connection
    let db = models::db::connect_with_config(&cfg.database).await?;

    // Schema ensure; tables are created only when missing
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!(event = "schema_ready", "database schema ensured");

    let repo = SeaOrmCatalogRepository::new(db);
    let app = build_app(CatalogService::new(Arc::new(repo)));

    // Bind and serve
    let listener = bind(&cfg).await?;
    info!(addr = %listener.local_addr()?, "server is running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
