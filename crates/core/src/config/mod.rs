//! Configuration loading and schema definitions
//!
//! Settings for the geocoder, the device position, default filters, the
//! export file and logging.

mod loader;
mod schema;

pub use loader::{Config, ENV_GEOCODER_URL, ENV_TIMEOUT_SECS};
pub use schema::*;
