use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CatalogSnapshot, VendorQuery};

/// Port for fetching product snapshots from the Catalog Service
///
/// The engine treats each response as the authoritative snapshot for one
/// invocation; adapters own transport concerns (timeouts, connection errors),
/// the engine owns none of them.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch all products in a category
    ///
    /// # Arguments
    /// * `category` - Category name as listed in the category table
    async fn products_in_category(&self, category: &str) -> Result<CatalogSnapshot>;

    /// Fetch products matching a vendor-scoped query
    ///
    /// # Arguments
    /// * `query` - Vendor/seller/status constraints; absent fields match all
    async fn products_for_vendor(&self, query: &VendorQuery) -> Result<CatalogSnapshot>;
}

#[async_trait]
impl<T> CatalogSource for Arc<T>
where
    T: CatalogSource + ?Sized,
{
    async fn products_in_category(&self, category: &str) -> Result<CatalogSnapshot> {
        (**self).products_in_category(category).await
    }

    async fn products_for_vendor(&self, query: &VendorQuery) -> Result<CatalogSnapshot> {
        (**self).products_for_vendor(query).await
    }
}
