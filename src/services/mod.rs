// Catalog reads and product creation
pub mod catalog;

pub use catalog::CatalogService;
