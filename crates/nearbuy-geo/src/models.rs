use nearbuy_core::error::{NearbuyError, Result};
use serde::{Deserialize, Serialize};

/// The shopper's resolved position in WGS-84 degrees
///
/// Constructed from an already-resolved geolocation result. Denied,
/// unsupported, or timed-out geolocation is represented by the absence of an
/// `Origin` (callers pass `None` to the annotation pass), never by an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Latitude in degrees, -90..=90
    pub lat: f64,

    /// Longitude in degrees, -180..=180
    pub lon: f64,
}

impl Origin {
    /// Create a validated origin
    ///
    /// Rejects non-finite values and coordinates outside WGS-84 bounds.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(NearbuyError::InvalidOrigin {
                reason: format!("Coordinates must be finite, got ({}, {})", lat, lon),
            });
        }

        if !(-90.0..=90.0).contains(&lat) {
            return Err(NearbuyError::InvalidOrigin {
                reason: format!("Latitude {} outside -90..=90", lat),
            });
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(NearbuyError::InvalidOrigin {
                reason: format!("Longitude {} outside -180..=180", lon),
            });
        }

        Ok(Self { lat, lon })
    }
}
