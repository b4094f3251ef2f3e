use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One row of the category table
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub name: &'static str,
    pub subcategories: &'static [&'static str],
}
