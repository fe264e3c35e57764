//! Error types for reference resolution

use schoolfinder_geo::GeoError;
use thiserror::Error;

/// Result type alias for geocoder service calls
pub type GeocoderResult<T> = Result<T, GeocoderError>;

/// Failures talking to a geocoding service or a position provider
#[derive(Error, Debug)]
pub enum GeocoderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service returned an error response
    #[error("Geocoder error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Body of the error response
        message: String,
    },

    /// Service answered with coordinates that are not numbers
    #[error("Malformed coordinates in geocoder response: {0}")]
    MalformedCoordinates(String),

    /// No device position could be obtained
    #[error("Device position unavailable: {0}")]
    DeviceUnavailable(String),
}

impl GeocoderError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if the request timed out
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

/// Why a reference position could not be established
///
/// These are the messages shown to the user; the underlying service error,
/// when there is one, is logged rather than surfaced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    /// The address text was empty after trimming
    #[error("Veuillez saisir une adresse")]
    EmptyAddress,

    /// Geocoding returned nothing or failed
    #[error("Impossible de géolocaliser cette adresse")]
    AddressNotFound {
        /// Address as submitted
        query: String,
    },

    /// The device position could not be obtained
    #[error("Impossible d'obtenir votre position actuelle")]
    PositionUnavailable,

    /// Typed coordinates are outside the valid range
    #[error("{0}")]
    OutOfRange(#[from] GeoError),
}

/// Error codes for [`LocateError`].
/// Range: 12xxx for reference resolution errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateErrorCode {
    /// Empty address
    EmptyAddress = 12001,
    /// Address not found
    AddressNotFound = 12002,
    /// Device position unavailable
    PositionUnavailable = 12003,
    /// Coordinates out of range
    OutOfRange = 12004,
}

impl LocateError {
    /// Stable numeric code
    #[must_use]
    pub fn code(&self) -> LocateErrorCode {
        match self {
            Self::EmptyAddress => LocateErrorCode::EmptyAddress,
            Self::AddressNotFound { .. } => LocateErrorCode::AddressNotFound,
            Self::PositionUnavailable => LocateErrorCode::PositionUnavailable,
            Self::OutOfRange(_) => LocateErrorCode::OutOfRange,
        }
    }
}
