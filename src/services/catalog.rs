use crate::{
    commands::{Command, CreateProductCommand},
    db::DbPool,
    entities::{Brand, Category, Store},
    errors::ServiceError,
    queries::{
        ListBrandsQuery, ListCategoriesQuery, ListProductsQuery, ListStoresQuery, ProductView,
        Query,
    },
};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, instrument};

/// Facade over the catalog queries and the product command.
///
/// Holds the shared connection handle and whether product creation runs the strict checks.
#[derive(Clone)]
pub struct CatalogService {
    db_pool: Arc<DbPool>,
    strict: bool,
}

impl CatalogService {
    pub fn new(db_pool: Arc<DbPool>, strict: bool) -> Self {
        Self { db_pool, strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    async fn run_query<Q>(&self, name: &'static str, query: Q) -> Result<Q::Result, ServiceError>
    where
        Q: Query,
    {
        let start = Instant::now();
        let result = query.execute(self.db_pool.as_ref()).await;
        histogram!("inventory.query.duration_ms", start.elapsed().as_secs_f64() * 1000.0, "query" => name);

        if let Err(e) = &result {
            error!(query = name, error = %e, "catalog query failed");
            counter!("inventory.query.failures", 1, "query" => name);
        }
        result
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        self.run_query("categories", ListCategoriesQuery).await
    }

    #[instrument(skip(self))]
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ServiceError> {
        self.run_query("brands", ListBrandsQuery).await
    }

    #[instrument(skip(self))]
    pub async fn list_stores(&self) -> Result<Vec<Store>, ServiceError> {
        self.run_query("stores", ListStoresQuery).await
    }

    /// Every product with reference names, ordered newest first
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<ProductView>, ServiceError> {
        self.run_query("products", ListProductsQuery).await
    }

    /// Stores a new product and returns its id.
    ///
    /// The service's strict flag overrides whatever the command carries.
    #[instrument(skip(self, command))]
    pub async fn create_product(&self, command: CreateProductCommand) -> Result<i32, ServiceError> {
        let saved = command
            .strict(self.strict)
            .execute(self.db_pool.clone())
            .await?;
        Ok(saved.id)
    }
}
