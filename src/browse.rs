//! Client-side product browsing: a cached snapshot of the product list, filtered locally.
//!
//! Filtering never goes back to the server. The snapshot only changes on [`ProductBrowser::refresh`].

use crate::client::{ApiClient, ClientError};
use crate::queries::ProductView;
use std::fmt::Write as _;

/// Shown in place of the table when nothing matches
pub const NO_PRODUCTS_MESSAGE: &str = "No products found";

/// Search text plus optional exact category and brand names.
///
/// Empty strings count as "no constraint", the way an unselected dropdown does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl ProductFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Case-insensitive substring on the name, exact match on category and brand names
    pub fn matches(&self, product: &ProductView) -> bool {
        let needle = self.search.to_lowercase();
        let name_ok = product
            .name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle);
        name_ok
            && exact(self.category.as_deref(), product.category_name.as_deref())
            && exact(self.brand.as_deref(), product.brand_name.as_deref())
    }
}

fn exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted.filter(|w| !w.is_empty()) {
        None => true,
        Some(w) => actual == Some(w),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductBrowser {
    snapshot: Vec<ProductView>,
}

impl ProductBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Vec<ProductView>) -> Self {
        Self { snapshot }
    }

    /// Refetches the full product list and replaces the snapshot
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<usize, ClientError> {
        self.snapshot = client.products().await?;
        Ok(self.snapshot.len())
    }

    /// Snapshot rows matching `filter`, in snapshot order
    pub fn filtered(&self, filter: &ProductFilter) -> Vec<&ProductView> {
        self.snapshot.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn render_filtered(&self, filter: &ProductFilter) -> String {
        render(&self.filtered(filter))
    }
}

/// Text table of `rows`, or the placeholder line when there are none
pub fn render(rows: &[&ProductView]) -> String {
    if rows.is_empty() {
        return NO_PRODUCTS_MESSAGE.to_string();
    }

    let mut out = format!(
        "{:<6} {:<24} {:>7} {:>10}  {:<14} {:<12} {:<16} {}\n",
        "ID", "Name", "Stock", "Price", "Category", "Brand", "Store", "Added"
    );
    for p in rows {
        let _ = writeln!(
            out,
            "{:<6} {:<24} {:>7} {:>10}  {:<14} {:<12} {:<16} {}",
            p.id,
            p.name.as_deref().unwrap_or("-"),
            p.stock.map_or_else(|| "-".to_string(), |s| s.to_string()),
            p.price.map_or_else(|| "-".to_string(), |v| format!("${v:.2}")),
            p.category_name.as_deref().unwrap_or("-"),
            p.brand_name.as_deref().unwrap_or("-"),
            p.store_name.as_deref().unwrap_or("-"),
            p.added_date
        );
    }
    out
}
