//! Inventory API library
//!
//! Categories, brands, stores and products over SQLite or PostgreSQL, served as a small REST API
//! with a static browser frontend.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod browse;
pub mod client;
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod openapi;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod services;
pub mod tracing;

use axum::{http::HeaderValue, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

use crate::db::DbPool;
use crate::services::CatalogService;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: config::AppConfig,
    pub catalog: CatalogService,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: config::AppConfig) -> Self {
        let catalog = CatalogService::new(db.clone(), config.strict_validation);
        Self {
            db,
            config,
            catalog,
        }
    }
}

/// The five JSON routes, relative to `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::catalog::catalog_routes())
        .merge(handlers::products::product_routes())
}

fn cors_layer(cfg: &config::AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        ::tracing::info!(count = origins.len(), "Restricting CORS to configured origins");
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Full application: API, health, OpenAPI document and the static frontend.
pub fn app_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);
    let static_files =
        ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes())
        .merge(handlers::health::health_routes())
        .merge(openapi::openapi_routes())
        .fallback_service(static_files)
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        .layer(cors_layer(&state.config))
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
