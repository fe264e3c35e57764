//! Turning user input into a reference position

use crate::error::{GeocoderError, GeocoderResult, LocateError};
use schoolfinder_geo::{Coordinate, ReferencePosition};
use std::future::Future;
use tracing::{debug, warn};

/// Best match for an address lookup
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Label reported by the service
    pub display_name: String,
}

/// Address-to-coordinates lookup
pub trait Geocoder {
    /// Resolve `query`, `Ok(None)` when nothing matches
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = GeocoderResult<Option<GeocodeHit>>> + Send;
}

/// Source of the user's current position
pub trait DeviceLocator {
    /// Current position of the device
    fn locate(&self) -> impl Future<Output = GeocoderResult<Coordinate>> + Send;
}

/// Device position taken from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocator {
    position: Option<Coordinate>,
}

impl FixedLocator {
    /// A locator that always reports `position`
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

impl DeviceLocator for FixedLocator {
    async fn locate(&self) -> GeocoderResult<Coordinate> {
        self.position
            .ok_or_else(|| GeocoderError::DeviceUnavailable("no device position configured".into()))
    }
}

/// What the user supplied as a starting point
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceInput {
    /// Free-form postal address
    Address(String),
    /// Coordinates typed directly
    Coordinates {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },
    /// The device's current position
    Device,
}

impl From<&ReferencePosition> for ReferenceInput {
    /// A pending position (0°,0° plus an address) becomes an address lookup.
    fn from(position: &ReferencePosition) -> Self {
        match position.address.as_deref() {
            Some(address) if position.needs_geocoding() => Self::Address(address.to_string()),
            _ => Self::Coordinates {
                latitude: position.latitude,
                longitude: position.longitude,
            },
        }
    }
}

/// Establish the reference position for `input`
///
/// Addresses are trimmed and geocoded; the match keeps the address as typed
/// as its label. Coordinates are range-checked. A device position is
/// labelled with [`schoolfinder_geo::DEVICE_POSITION_LABEL`]. Service
/// failures are logged and mapped to the user-facing [`LocateError`].
pub async fn resolve<G, L>(
    input: &ReferenceInput,
    geocoder: &G,
    locator: &L,
) -> Result<ReferencePosition, LocateError>
where
    G: Geocoder,
    L: DeviceLocator,
{
    match input {
        ReferenceInput::Address(text) => {
            let query = text.trim();
            if query.is_empty() {
                return Err(LocateError::EmptyAddress);
            }

            match geocoder.geocode(query).await {
                Ok(Some(hit)) => {
                    debug!(query, matched = %hit.display_name, "Address resolved");
                    Ok(ReferencePosition::labelled(hit.latitude, hit.longitude, query))
                }
                Ok(None) => {
                    warn!(query, "No match for address");
                    Err(LocateError::AddressNotFound {
                        query: query.to_string(),
                    })
                }
                Err(e) => {
                    warn!(query, error = %e, timeout = e.is_timeout(), "Geocoding failed");
                    Err(LocateError::AddressNotFound {
                        query: query.to_string(),
                    })
                }
            }
        }
        ReferenceInput::Coordinates {
            latitude,
            longitude,
        } => {
            let coordinate = Coordinate::validated(*latitude, *longitude)?;
            Ok(ReferencePosition::from(coordinate))
        }
        ReferenceInput::Device => match locator.locate().await {
            Ok(coordinate) => Ok(ReferencePosition::device(coordinate)),
            Err(e) => {
                warn!(error = %e, "Device position unavailable");
                Err(LocateError::PositionUnavailable)
            }
        },
    }
}
