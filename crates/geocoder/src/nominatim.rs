//! HTTP client for Nominatim-compatible search services

use crate::config::ClientConfig;
use crate::error::{GeocoderError, GeocoderResult};
use crate::locate::{GeocodeHit, Geocoder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// One entry of a `/search?format=json` answer
///
/// Nominatim sends coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    /// Latitude, decimal string
    pub lat: String,
    /// Longitude, decimal string
    pub lon: String,
    /// Full label of the match
    #[serde(default)]
    pub display_name: String,
}

/// Geocoder backed by a Nominatim search endpoint
///
/// One request per lookup, no retries. A failed lookup is reported to the
/// caller, who decides what the user sees.
#[derive(Clone)]
pub struct NominatimGeocoder {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl NominatimGeocoder {
    /// Create a client with the default configuration
    pub fn new() -> GeocoderResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with specific configuration
    pub fn with_config(config: ClientConfig) -> GeocoderResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| GeocoderError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(GeocoderError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search for `query` and return the best match, if any
    #[instrument(skip(self), fields(request_id))]
    pub async fn search(&self, query: &str) -> GeocoderResult<Option<GeocodeHit>> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let mut params = vec![("format", "json"), ("limit", "1"), ("q", query)];
        if !self.config.country_codes.is_empty() {
            params.push(("countrycodes", self.config.country_codes.as_str()));
        }

        let start = Instant::now();
        let response = self
            .inner
            .get(self.config.search_url())
            .header(X_REQUEST_ID, &request_id)
            .query(&params)
            .send()
            .await?;

        let places: Vec<Place> = handle_response(response).await?;
        debug!(
            request_id = %request_id,
            matches = places.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Geocoder answered"
        );

        first_hit(&places)
    }
}

impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> GeocoderResult<Option<GeocodeHit>> {
        self.search(query).await
    }
}

/// Handle HTTP response and deserialize
async fn handle_response(response: Response) -> GeocoderResult<Vec<Place>> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(GeocoderError::Request)
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(GeocoderError::api_response(status.as_u16(), message))
    }
}

/// Convert the first place of an answer into a hit
pub fn first_hit(places: &[Place]) -> GeocoderResult<Option<GeocodeHit>> {
    let Some(place) = places.first() else {
        return Ok(None);
    };

    let latitude = parse_coordinate(&place.lat)?;
    let longitude = parse_coordinate(&place.lon)?;

    Ok(Some(GeocodeHit {
        latitude,
        longitude,
        display_name: place.display_name.clone(),
    }))
}

fn parse_coordinate(text: &str) -> GeocoderResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocoderError::MalformedCoordinates(text.to_string()))
}
