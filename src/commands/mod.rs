use crate::{db::DbPool, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

/// A write operation against the store.
///
/// A command carries everything the operation needs, validates itself and persists in one
/// `execute` call.
#[async_trait]
pub trait Command: Send + Sync {
    /// The return type of the command when executed successfully
    type Result;

    async fn execute(&self, db_pool: Arc<DbPool>) -> Result<Self::Result, ServiceError>;
}

pub mod create_product_command;

pub use create_product_command::CreateProductCommand;
