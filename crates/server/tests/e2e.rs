use std::net::SocketAddr;
use std::sync::Arc;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::catalog::{repo::seaorm::SeaOrmCatalogRepository, CatalogService};
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env.test or env var.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    // Connect DB and ensure schema
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let app = server::startup::build_app(CatalogService::new(Arc::new(SeaOrmCatalogRepository::new(db))));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_category_and_news_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = reqwest::Client::new();

    let name = format!("e2e_{}", Uuid::new_v4());
    let res = c.post(format!("{}/categories", app.base_url)).json(&json!({"name": name})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let text = res.text().await?;
    let category_id: i32 = text.trim_start_matches("Category added with ID: ").parse()?;

    let listed: Vec<Value> = c.get(format!("{}/categories", app.base_url)).send().await?.json().await?;
    assert!(listed.iter().any(|v| v["id"] == category_id && v["name"] == name.as_str()));

    let res = c
        .post(format!("{}/categories/{}", app.base_url, category_id))
        .json(&json!({"title": "A", "description": "B"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let text = res.text().await?;
    let news_id: i32 = text
        .trim_start_matches("News added with ID: ")
        .split(' ')
        .next()
        .unwrap_or_default()
        .parse()?;

    let res = c.get(format!("{}/categories/{}/news/{}", app.base_url, category_id, news_id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"id": news_id, "title": "A", "description": "B"}));

    let res = c.get(format!("{}/categories/{}/news/{}", app.base_url, category_id, i32::MAX)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_category() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/categories/{}/news", app.base_url, i32::MAX)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "[]");

    let res = c
        .post(format!("{}/categories/{}", app.base_url, i32::MAX))
        .json(&json!({"title": "A", "description": "B"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
