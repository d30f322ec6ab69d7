use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "1.0.0",
        description = r#"
# Inventory API

Lists categories, brands and stores, and lists or adds products.

## Error Handling

Every failing route answers with the same body:

```json
{
  "message": "Database error",
  "error": "no such table: product",
  "request_id": "6f1f0c86-3c38-4f7a-9b1e-2f0c1a8b9d11"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development")
    ),
    tags(
        (name = "catalog", description = "Reference data"),
        (name = "products", description = "Product listing and creation"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::catalog::list_categories,
        crate::handlers::catalog::list_brands,
        crate::handlers::catalog::list_stores,
        crate::handlers::catalog::list_products,
        crate::handlers::products::create_product,
        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::entities::Category,
            crate::entities::Brand,
            crate::entities::Store,
            crate::queries::ProductView,
            crate::handlers::products::CreateProductRequest,
            crate::handlers::products::ProductCreatedResponse,
            crate::handlers::health::HealthResponse,
            crate::handlers::health::ComponentStatus,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

/// Serves the generated document at `/api-docs/openapi.json`
pub fn openapi_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        for path in [
            "/api/categories",
            "/api/brands",
            "/api/stores",
            "/api/products",
            "/health",
        ] {
            assert!(json.contains(&format!("\"{path}\"")), "missing {path}");
        }
        assert!(json.contains("ProductView"));
        assert!(json.contains("productId"));
    }
}
