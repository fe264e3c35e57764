//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Returns the raw, unrounded value. Ranking uses [`distance_km`], which rounds
/// to two decimals.
///
/// # Example
/// ```
/// use schoolfinder_geo::{haversine_distance, Coordinate};
///
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let marseille = Coordinate::new(43.2965, 5.3698);
///
/// let distance = haversine_distance(&paris, &marseille);
/// assert!((distance - 661.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    // Rounding can push `a` just past 1 for antipodal points.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers between two points given in degrees, rounded to
/// two decimal places.
///
/// # Arguments
/// * `lat1`, `lon1` - First point
/// * `lat2`, `lon2` - Second point
///
/// # Example
/// ```
/// use schoolfinder_geo::distance_km;
///
/// assert_eq!(distance_km(45.0, 5.0, 45.0, 5.0), 0.0);
/// ```
#[inline]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    round_km(haversine_distance(
        &Coordinate::new(lat1, lon1),
        &Coordinate::new(lat2, lon2),
    ))
}

/// Rounds a distance to two decimals, halves away from zero.
#[inline]
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
