//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Invalid coordinate values
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Latitude outside [-90, 90]
    #[error("La latitude doit être comprise entre -90 et 90 (reçu {0})")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("La longitude doit être comprise entre -180 et 180 (reçu {0})")]
    LongitudeOutOfRange(f64),
}

/// Error code for integration with schoolfinder-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid coordinate values
    InvalidCoordinate = 10001,
    /// Latitude out of range
    LatitudeOutOfRange = 10002,
    /// Longitude out of range
    LongitudeOutOfRange = 10003,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::LatitudeOutOfRange(_) => GeoErrorCode::LatitudeOutOfRange,
            GeoError::LongitudeOutOfRange(_) => GeoErrorCode::LongitudeOutOfRange,
        }
    }
}
