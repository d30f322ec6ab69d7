use crate::{
    commands::CreateProductCommand,
    errors::ServiceError,
    handlers::{
        catalog::list_products,
        common::{created_response, ApiJson},
        AppState,
    },
};
use axum::{extract::State, response::IntoResponse, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const PRODUCT_CREATED_MESSAGE: &str = "Product added successfully!";

pub fn product_routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products).post(create_product))
}

/// Body of `POST /api/products`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "pname": "Widget",
    "p_stock": 10,
    "price": 9.99,
    "cid": 1,
    "bid": 1,
    "sid": null
}))]
pub struct CreateProductRequest {
    pub pname: String,
    pub p_stock: i32,
    pub price: f64,
    #[serde(default)]
    pub cid: Option<i32>,
    #[serde(default)]
    pub bid: Option<i32>,
    #[serde(default)]
    pub sid: Option<i32>,
}

impl From<CreateProductRequest> for CreateProductCommand {
    fn from(req: CreateProductRequest) -> Self {
        CreateProductCommand::new(req.pname, req.p_stock, req.price)
            .with_references(req.cid, req.bid, req.sid)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCreatedResponse {
    pub message: String,
    #[serde(rename = "productId")]
    pub product_id: i32,
}

/// Add a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductCreatedResponse,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Malformed body, or rejected in strict mode", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let product_id = state.catalog.create_product(payload.into()).await?;
    Ok(created_response(ProductCreatedResponse {
        message: PRODUCT_CREATED_MESSAGE.to_string(),
        product_id,
    }))
}
