//! Order API Library
//!
//! A minimal CRUD REST service for a single Order resource backed by a
//! relational table: axum handlers over a sea-orm repository, with field
//! validation and explicit error-to-status mapping.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod repositories;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::repositories::order_repository::OrderRepository;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn order_repository(&self) -> OrderRepository {
        OrderRepository::new(self.db.clone())
    }
}

/// Assembles the application router: health probes plus the order resource.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::health::health_routes())
        .merge(order_routes())
}

/// Routes for the order resource.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/order/create", post(handlers::orders::create_order))
        .route(
            "/order/:id",
            get(handlers::orders::get_order)
                .put(handlers::orders::update_order)
                .delete(handlers::orders::delete_order),
        )
}
