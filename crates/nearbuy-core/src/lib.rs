//! Nearbuy Core - Domain models, configuration, and port definitions
//!
//! This crate contains the core domain types and port definitions for the
//! Nearbuy catalog engine.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{NearbuyError, Result};
