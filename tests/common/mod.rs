#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;

use order_api::{
    config::AppConfig,
    db::{self, DbConfig},
    migrator::Migrator,
    AppState,
};

/// Helper harness serving the application router over an in-memory SQLite
/// database with fresh schema per test.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let state = AppState {
            db: fresh_db().await,
            config: test_config(),
        };
        let router = order_api::app_router().with_state(state.clone());
        Self { router, state }
    }

    /// Dispatch a request against the router without binding a socket.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("dispatch request")
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::new(
        "sqlite::memory:".to_string(),
        "127.0.0.1".to_string(),
        18_080,
        "test".to_string(),
    )
}

/// In-memory SQLite pinned to a single connection so every query sees the
/// same database, with migrations applied.
pub async fn fresh_db() -> Arc<DatabaseConnection> {
    let db_cfg = DbConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        ..DbConfig::default()
    };
    let db = db::establish_connection_with_config(&db_cfg)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(db)
}

pub async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response body")
}

pub async fn response_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 response body")
}
