//! Error types for Nearbuy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NearbuyError {
    // Catalog errors
    #[error("Unknown category: {name}")]
    CategoryUnknown { name: String },

    #[error("Catalog service unavailable: {reason}. Try: {remediation}")]
    CatalogUnavailable {
        reason: String,
        remediation: String,
    },

    // Geolocation errors
    #[error("Invalid origin: {reason}")]
    InvalidOrigin { reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, NearbuyError>;
