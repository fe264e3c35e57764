//! Configuration for the geocoding client

use crate::error::{GeocoderError, GeocoderResult};
use schoolfinder_core::config::GeocoderConfig;
use std::time::Duration;

/// Default public Nominatim instance
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of a Nominatim-compatible service
    pub base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// ISO country codes restricting results, comma-separated; empty for none
    pub country_codes: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from(&GeocoderConfig::default())
    }
}

impl From<&GeocoderConfig> for ClientConfig {
    fn from(config: &GeocoderConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            country_codes: config.country_codes.clone(),
        }
    }
}

impl ClientConfig {
    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the country restriction
    #[must_use]
    pub fn with_country_codes(mut self, codes: impl Into<String>) -> Self {
        self.country_codes = codes.into();
        self
    }

    /// URL of the search endpoint
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    pub fn validate(&self) -> GeocoderResult<()> {
        if self.base_url.is_empty() {
            return Err(GeocoderError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GeocoderError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(GeocoderError::config("timeout cannot be zero"));
        }

        if self.user_agent.trim().is_empty() {
            return Err(GeocoderError::config("user_agent cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.country_codes, "fr");
        assert!(config.user_agent.starts_with("schoolfinder/"));
    }

    #[test]
    fn test_search_url_trims_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.search_url(), "http://localhost:8080/search");
    }

    #[test]
    fn test_from_core_config() {
        let core = GeocoderConfig {
            timeout_secs: 3,
            country_codes: String::new(),
            ..GeocoderConfig::default()
        };
        let config = ClientConfig::from(&core);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.country_codes.is_empty());
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default()
            .with_base_url("ftp://example.org")
            .validate()
            .is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
