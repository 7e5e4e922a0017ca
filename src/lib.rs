//! smesales API library
//!
//! Sales management backend: billing entities, customers, products, sales
//! with their line items, and customer payments over a relational store.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod openapi;
pub mod services;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use handlers::AppServices;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        let services = AppServices::new(db.clone());
        Self {
            db,
            config,
            services,
        }
    }
}

/// Entity routes, nested under `/api` by [`app`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/billing-entities",
            handlers::billing_entities::billing_entity_routes(),
        )
        .nest("/customers", handlers::customers::customer_routes())
        .nest("/products", handlers::products::product_routes())
        .nest("/sales", handlers::sales::sale_routes())
        .nest("/sale-details", handlers::sale_details::sale_detail_routes())
        .nest("/payments", handlers::payments::payment_routes())
}

/// Full application router: banner, health, API surface and Swagger UI.
/// Middleware layers are applied by the binary on top of this.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "smesales-api up" }))
        .merge(handlers::health::health_routes())
        .nest("/api", api_routes())
        .merge(openapi::swagger_ui())
        .with_state(state)
}
