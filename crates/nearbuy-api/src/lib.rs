//! Nearbuy API - HTTP facade for the display pipeline
//!
//! This is the HTTP adapter the storefront UI talks to.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
