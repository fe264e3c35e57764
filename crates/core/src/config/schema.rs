//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// Address lookup service
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Configured device position
    #[serde(default)]
    pub device: DeviceConfig,

    /// Default filters
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Export file settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Address lookup service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocoderConfig {
    /// Base URL of a Nominatim-compatible service
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,

    /// User-Agent sent with every request (required by Nominatim's usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Comma-separated ISO country codes limiting results, empty for worldwide
    #[serde(default = "default_country_codes")]
    pub country_codes: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            country_codes: default_country_codes(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    format!("schoolfinder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_country_codes() -> String {
    "fr".to_string()
}

/// Position reported when the user asks for "my location"
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct DeviceConfig {
    /// Latitude in degrees
    pub latitude: Option<f64>,

    /// Longitude in degrees
    pub longitude: Option<f64>,
}

impl DeviceConfig {
    /// Both coordinates, if configured
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Filters applied when none are given on the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiltersConfig {
    /// "all", "college" or "lycee"
    #[serde(default = "default_filter")]
    pub level: String,

    /// "all", "public" or "private"
    #[serde(default = "default_filter")]
    pub sector: String,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            level: default_filter(),
            sector: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "all".to_string()
}

/// Export file settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// File name used when `--export` points at a directory
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_export_file_name(),
        }
    }
}

fn default_export_file_name() -> String {
    "etablissements-classes-par-distance.csv".to_string()
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default level, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
