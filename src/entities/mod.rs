//! Persistent entities. Table and column names match the legacy schema
//! (`categories.cid`, `product.pname`, ...), Rust field names are descriptive.

pub mod brand;
pub mod category;
pub mod product;
pub mod store;

pub use brand::Model as Brand;
pub use category::Model as Category;
pub use product::Model as Product;
pub use store::Model as Store;
