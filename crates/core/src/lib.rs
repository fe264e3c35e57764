//! Core utilities for schoolfinder
//!
//! This crate provides shared functionality used by the command-line tool:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation and
//!   environment overrides
//!
//! # Example
//!
//! ```rust,no_run
//! use schoolfinder_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! println!("Geocoding with {}", config.schema.geocoder.base_url);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
