//! HTTP handlers for the catalog API.

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

pub mod catalog;
pub mod common;
pub mod health;
pub mod products;
