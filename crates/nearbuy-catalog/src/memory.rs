//! In-memory catalog source for development and testing.
//!
//! Lock access uses `RwLock::unwrap()` intentionally. Lock poisoning only
//! occurs when another thread panicked while holding the lock, which is an
//! unrecoverable state. Production deployments use the HTTP adapter.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use nearbuy_core::error::Result;
use nearbuy_core::models::{CatalogSnapshot, Product, VendorQuery};
use nearbuy_core::ports::CatalogSource;

/// In-memory implementation of `CatalogSource`
///
/// Answers the same two queries as the Catalog Service over a fixed product
/// list: category matches exactly; vendor-query fields are AND-composed and
/// absent fields match everything.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Arc<RwLock<Vec<Product>>>,
}

impl MemoryCatalog {
    /// Create an empty in-memory catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with products
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products: Arc::new(RwLock::new(products)) }
    }

    /// Add products to the catalog
    pub fn add_products(&self, products: impl IntoIterator<Item = Product>) {
        self.products.write().unwrap().extend(products);
    }

    /// Number of products currently held
    pub fn len(&self) -> usize {
        self.products.read().unwrap().len()
    }

    /// Check if the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn matches_vendor_query(product: &Product, query: &VendorQuery) -> bool {
    if let Some(vendor) = query.vendor.as_deref() {
        if product.vendor.as_deref() != Some(vendor) {
            return false;
        }
    }
    if let Some(seller_id) = query.seller_id.as_deref() {
        if product.seller_id.as_deref() != Some(seller_id) {
            return false;
        }
    }
    if let Some(status) = query.status.as_deref() {
        if product.status.as_deref() != Some(status) {
            return false;
        }
    }
    true
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn products_in_category(&self, category: &str) -> Result<CatalogSnapshot> {
        let products = self
            .products
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect();

        Ok(CatalogSnapshot::new(products))
    }

    async fn products_for_vendor(&self, query: &VendorQuery) -> Result<CatalogSnapshot> {
        let products = self
            .products
            .read()
            .unwrap()
            .iter()
            .filter(|p| matches_vendor_query(p, query))
            .cloned()
            .collect();

        Ok(CatalogSnapshot::new(products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryCatalog {
        let mut approved = Product::new("1", "Basmati Rice", 120.0)
            .with_vendor("Sunrise Stores")
            .with_category("groceries");
        approved.seller_id = Some("s-1".to_string());
        approved.status = Some("approved".to_string());

        let mut pending = Product::new("2", "Raw Honey", 250.0)
            .with_vendor("Sunrise Stores")
            .with_category("groceries");
        pending.seller_id = Some("s-1".to_string());
        pending.status = Some("pending".to_string());

        let other = Product::new("3", "Brown Bread", 45.0)
            .with_vendor("Daily Bakes")
            .with_category("bakery");

        MemoryCatalog::with_products(vec![approved, pending, other])
    }

    #[tokio::test]
    async fn test_category_query_is_exact() {
        let catalog = sample();

        let snapshot = catalog.products_in_category("groceries").await.unwrap();
        assert_eq!(snapshot.products.len(), 2);

        let snapshot = catalog.products_in_category("Groceries").await.unwrap();
        assert!(snapshot.products.is_empty());
    }

    #[tokio::test]
    async fn test_empty_vendor_query_returns_everything() {
        let catalog = sample();

        let snapshot = catalog.products_for_vendor(&VendorQuery::new()).await.unwrap();
        assert_eq!(snapshot.products.len(), 3);
    }

    #[tokio::test]
    async fn test_vendor_query_fields_compose() {
        let catalog = sample();

        let query = VendorQuery::new().with_vendor("Sunrise Stores").with_status("approved");
        let snapshot = catalog.products_for_vendor(&query).await.unwrap();

        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].name, "Basmati Rice");
    }

    #[tokio::test]
    async fn test_status_query_skips_products_without_status() {
        let catalog = sample();

        let query = VendorQuery::new().with_status("approved");
        let snapshot = catalog.products_for_vendor(&query).await.unwrap();

        // "Brown Bread" has no status field and is not matched
        assert_eq!(snapshot.products.len(), 1);
    }

    #[tokio::test]
    async fn test_add_products() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.is_empty());

        catalog.add_products(vec![Product::new("1", "Basmati Rice", 120.0)]);
        assert_eq!(catalog.len(), 1);
    }
}
