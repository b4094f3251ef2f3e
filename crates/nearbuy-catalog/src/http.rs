use std::time::Duration;

use async_trait::async_trait;
use nearbuy_core::error::{NearbuyError, Result};
use nearbuy_core::models::{CatalogSnapshot, Product, VendorQuery};
use nearbuy_core::ports::CatalogSource;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP adapter for the Catalog Service
///
/// One attempt per fetch with a single timeout; retries, if any, belong to
/// the caller's deployment, not this client.
pub struct HttpCatalog {
    /// Base URL of the Catalog Service (e.g. "http://localhost:8080")
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Create a new catalog client
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self { base_url: base_url.into(), client }
    }

    /// Create with the default localhost URL and timeout
    pub fn localhost() -> Self {
        Self::new("http://localhost:8080", DEFAULT_TIMEOUT_SECS)
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, url: String, query: &[(&str, &str)]) -> Result<CatalogSnapshot> {
        tracing::debug!(url = %url, "fetching catalog snapshot");

        let response = self.client.get(&url).query(query).send().await.map_err(|e| {
            NearbuyError::CatalogUnavailable {
                reason: format!("Failed to connect to Catalog Service: {}", e),
                remediation: format!(
                    "Ensure the Catalog Service is reachable at {} and the network allows \
                     outbound requests.",
                    self.base_url
                ),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(NearbuyError::CatalogUnavailable {
                reason: format!("Catalog Service error ({}): {}", status, error_text),
                remediation: "Check the Catalog Service logs and that the requested path exists."
                    .to_string(),
            });
        }

        let products: Vec<Product> =
            response.json().await.map_err(|e| NearbuyError::CatalogUnavailable {
                reason: format!("Failed to parse Catalog Service response: {}", e),
                remediation: "Check that the service returns a JSON array of products."
                    .to_string(),
            })?;

        Ok(CatalogSnapshot::new(products))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn products_in_category(&self, category: &str) -> Result<CatalogSnapshot> {
        let url = format!("{}/api/products/category/{}", self.base_url, category);
        self.fetch(url, &[]).await
    }

    async fn products_for_vendor(&self, query: &VendorQuery) -> Result<CatalogSnapshot> {
        let url = format!("{}/api/products", self.base_url);

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(vendor) = query.vendor.as_deref() {
            params.push(("vendor", vendor));
        }
        if let Some(seller_id) = query.seller_id.as_deref() {
            params.push(("sellerId", seller_id));
        }
        if let Some(status) = query.status.as_deref() {
            params.push(("status", status));
        }

        self.fetch(url, &params).await
    }
}
