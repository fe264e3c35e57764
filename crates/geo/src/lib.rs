//! Geospatial utilities for schoolfinder.
//!
//! This crate provides:
//! - Haversine distance calculations (raw, and rounded to two decimals)
//! - Proximity bands used to colour and label distances
//! - Reference positions (typed address, coordinates or device location)
//! - Batch processing with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use schoolfinder_geo::{distance_km, Coordinate};
//!
//! let paris = Coordinate::new(48.8566, 2.3522);
//! let lyon = Coordinate::new(45.7640, 4.8357);
//!
//! let km = distance_km(paris.latitude, paris.longitude, lyon.latitude, lyon.longitude);
//! assert!((km - 392.0).abs() < 5.0);
//! ```

mod haversine;
mod proximity;
mod reference;
pub mod batch;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use haversine::{distance_km, haversine_distance, round_km, EARTH_RADIUS_KM};
pub use proximity::{format_distance, is_near, ProximityBand, NEAR_THRESHOLD_KM};
pub use reference::{ReferencePosition, DEVICE_POSITION_LABEL};
pub use batch::{calculate_distances, Located};
pub use error::{GeoError, GeoErrorCode, Result};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting values outside the valid ranges.
    ///
    /// Used for coordinates typed by a user, where an out-of-range value is
    /// an input mistake rather than data to carry along.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::InvalidCoordinate(format!(
                "{latitude}, {longitude} is not a finite coordinate"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(48.8566, 2.3522);
        assert_eq!(coord.latitude, 48.8566);
        assert_eq!(coord.longitude, 2.3522);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_validated_rejects_out_of_range() {
        assert!(Coordinate::validated(45.0, 5.0).is_ok());
        assert!(matches!(
            Coordinate::validated(90.5, 0.0),
            Err(GeoError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Coordinate::validated(0.0, -180.1),
            Err(GeoError::LongitudeOutOfRange(_))
        ));
        assert!(matches!(
            Coordinate::validated(f64::NAN, 0.0),
            Err(GeoError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (48.8566, 2.3522).into();
        assert_eq!(coord.latitude, 48.8566);
    }
}
