//! Nearbuy Catalog - Catalog Service adapters
//!
//! Implementations of the `CatalogSource` port: an HTTP client for the real
//! Catalog Service and an in-memory source for tests and offline snapshots.

pub mod http;
pub mod memory;

pub use http::HttpCatalog;
pub use memory::MemoryCatalog;
