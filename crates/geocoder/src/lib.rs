//! Reference position resolution for schoolfinder
//!
//! Turns what the user typed (an address, a coordinate pair, or "my
//! position") into the [`ReferencePosition`](schoolfinder_geo::ReferencePosition)
//! that distances are measured from.
//!
//! # Features
//!
//! - **Nominatim client**: one lookup per address, with timeout and a
//!   configurable User-Agent
//! - **Injected capabilities**: [`Geocoder`] and [`DeviceLocator`] traits so
//!   callers and tests can swap the network out
//! - **Request correlation**: every lookup carries a unique `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use schoolfinder_geocoder::{resolve, FixedLocator, NominatimGeocoder, ReferenceInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let geocoder = NominatimGeocoder::new()?;
//!     let input = ReferenceInput::Address("Place Bellecour, Lyon".to_string());
//!
//!     let position = resolve(&input, &geocoder, &FixedLocator::default()).await?;
//!     println!("{}, {}", position.latitude, position.longitude);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod locate;
pub mod nominatim;

pub use config::ClientConfig;
pub use error::{GeocoderError, GeocoderResult, LocateError, LocateErrorCode};
pub use locate::{resolve, DeviceLocator, FixedLocator, GeocodeHit, Geocoder, ReferenceInput};
pub use nominatim::NominatimGeocoder;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::error::{GeocoderError, LocateError};
    pub use crate::locate::{resolve, DeviceLocator, FixedLocator, Geocoder, ReferenceInput};
    pub use crate::nominatim::NominatimGeocoder;
}
