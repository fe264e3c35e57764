//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding `geocoder.base_url`
pub const ENV_GEOCODER_URL: &str = "SCHOOLFINDER_GEOCODER_URL";
/// Environment variable overriding `geocoder.timeout_secs`
pub const ENV_TIMEOUT_SECS: &str = "SCHOOLFINDER_TIMEOUT_SECS";

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used when nothing is found. Environment
    /// overrides are applied last, then the result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let mut schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        apply_env_overrides(&mut schema)?;

        let config = Self {
            schema,
            path: config_path,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, without overrides
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = Self {
            schema: toml::from_str(content)?,
            path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that would only fail later, at request time
    pub fn validate(&self) -> Result<()> {
        let geocoder = &self.schema.geocoder;
        if !geocoder.base_url.starts_with("http://") && !geocoder.base_url.starts_with("https://") {
            return Err(Error::config_invalid(
                "geocoder.base_url must start with http:// or https://",
            ));
        }
        if geocoder.timeout_secs == 0 {
            return Err(Error::config_invalid("geocoder.timeout_secs cannot be zero"));
        }
        if geocoder.user_agent.trim().is_empty() {
            return Err(Error::config_invalid("geocoder.user_agent cannot be empty"));
        }

        let device = &self.schema.device;
        if device.latitude.is_some() != device.longitude.is_some() {
            return Err(Error::config_invalid(
                "device.latitude and device.longitude must be set together",
            ));
        }
        if let Some((lat, lon)) = device.position() {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(Error::config_invalid(format!(
                    "device position {lat}, {lon} is outside the valid range"
                )));
            }
        }

        Ok(())
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = [
        ".schoolfinder.toml",
        "schoolfinder.toml",
        ".config/schoolfinder.toml",
    ]
    .into_iter()
    .map(PathBuf::from);

    let user = dirs::config_dir().map(|dir| dir.join("schoolfinder").join("config.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}

fn apply_env_overrides(schema: &mut ConfigSchema) -> Result<()> {
    if let Ok(url) = env::var(ENV_GEOCODER_URL) {
        schema.geocoder.base_url = url;
    }
    if let Ok(secs) = env::var(ENV_TIMEOUT_SECS) {
        schema.geocoder.timeout_secs = secs.trim().parse().map_err(|_| {
            Error::config_invalid(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got {secs:?}"))
        })?;
    }
    Ok(())
}
