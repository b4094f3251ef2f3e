use nearbuy_core::models::{AnnotatedProduct, Product};

use crate::distance::{haversine_km, round_to_tenth};
use crate::models::Origin;

/// Distance assigned to every product when no origin is available
///
/// The grid always shows some distance, so denied or unavailable geolocation
/// degrades to this placeholder rather than an error.
pub const FALLBACK_DISTANCE_KM: f64 = 5.0;

/// Sentinel distance for products without coordinates
///
/// Large enough to rank distance-unknown products last under distance sort.
pub const UNKNOWN_DISTANCE_KM: f64 = 999.0;

const FALLBACK_LABEL: &str = "Within 5km";
const UNKNOWN_LABEL: &str = "Distance N/A";

/// Annotate every product with its distance from the origin
///
/// Total function: missing coordinates and absent origins degrade to
/// placeholder values, never to an error. The input slice is not modified.
pub fn annotate(products: &[Product], origin: Option<Origin>) -> Vec<AnnotatedProduct> {
    products.iter().map(|product| annotate_one(product, origin)).collect()
}

fn annotate_one(product: &Product, origin: Option<Origin>) -> AnnotatedProduct {
    let (distance_km, distance_label) = match origin {
        None => (FALLBACK_DISTANCE_KM, FALLBACK_LABEL.to_string()),
        Some(origin) => match (product.lat, product.lon) {
            (Some(lat), Some(lon)) => {
                let km = round_to_tenth(haversine_km(origin, lat, lon));
                (km, format!("{:.1} km away", km))
            }
            _ => (UNKNOWN_DISTANCE_KM, UNKNOWN_LABEL.to_string()),
        },
    };

    AnnotatedProduct { product: product.clone(), distance_km, distance_label }
}
