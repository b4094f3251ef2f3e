use crate::models::Origin;

/// Earth radius in kilometers used by the storefront's distance display
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between the origin and a point,
/// using the Haversine formula
pub fn haversine_km(origin: Origin, lat: f64, lon: f64) -> f64 {
    let dlat = (lat - origin.lat).to_radians();
    let dlon = (lon - origin.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + origin.lat.to_radians().cos() * lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to one decimal place, matching the display precision
pub fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
