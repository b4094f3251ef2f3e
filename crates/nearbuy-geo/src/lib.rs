//! Nearbuy Geo - Origin handling and distance annotation
//!
//! This crate owns the geographic side of the engine: shopper origin
//! validation, great-circle distance, and the per-product distance
//! annotation pass.

pub mod annotate;
pub mod distance;
pub mod models;

pub use annotate::{annotate, FALLBACK_DISTANCE_KM, UNKNOWN_DISTANCE_KM};
pub use distance::haversine_km;
pub use models::Origin;
