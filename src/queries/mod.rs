use crate::errors::ServiceError;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

pub mod catalog_queries;

pub use catalog_queries::{
    ListBrandsQuery, ListCategoriesQuery, ListProductsQuery, ListStoresQuery, ProductView,
};

/// A read-only operation against the store
#[async_trait]
pub trait Query: Send + Sync {
    type Result: Send + Sync;

    async fn execute(&self, db_pool: &DatabaseConnection) -> Result<Self::Result, ServiceError>;
}
