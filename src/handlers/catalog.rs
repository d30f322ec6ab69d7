use crate::{
    entities::{Brand, Category, Store},
    errors::ServiceError,
    handlers::{common::success_response, AppState},
    queries::ProductView,
};
use axum::{extract::State, response::IntoResponse, routing::get, Router};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/brands", get(list_brands))
        .route("/stores", get(list_stores))
}

/// List every category
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = [Category],
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let categories = state.catalog.list_categories().await?;
    Ok(success_response(categories))
}

/// List every brand
#[utoipa::path(
    get,
    path = "/api/brands",
    responses(
        (status = 200, description = "All brands", body = [Brand]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_brands(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let brands = state.catalog.list_brands().await?;
    Ok(success_response(brands))
}

/// List every store
#[utoipa::path(
    get,
    path = "/api/stores",
    responses(
        (status = 200, description = "All stores", body = [Store]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "catalog"
)]
pub async fn list_stores(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let stores = state.catalog.list_stores().await?;
    Ok(success_response(stores))
}

/// List products joined with category, brand and store names, newest first
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [ProductView]),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let products = state.catalog.list_products().await?;
    Ok(success_response(products))
}
