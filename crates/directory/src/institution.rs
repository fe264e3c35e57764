//! The canonical institution record.

use schoolfinder_geo::{is_near, Coordinate, Located, ProximityBand};
use serde::{Deserialize, Serialize};

/// One school, whatever the layout of the file it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    /// Position among the accepted rows of one load (0-based)
    pub id: usize,
    /// Display name, never empty
    pub name: String,
    /// Registry code (UAI) when the source carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,
    /// Human-readable location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Free-text classification, e.g. "Public (IPS: 103.2)"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Kilometers from the last reference position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Institution {
    /// Creates an institution with only the required fields.
    pub fn new(id: usize, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            external_code: None,
            address: None,
            latitude,
            longitude,
            kind: None,
            distance: None,
        }
    }

    /// Builder-style method to set the address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder-style method to set the type
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Builder-style method to set the registry code
    #[must_use]
    pub fn with_external_code(mut self, code: impl Into<String>) -> Self {
        self.external_code = Some(code.into());
        self
    }

    /// Band for the current distance, if one has been computed.
    pub fn proximity(&self) -> Option<ProximityBand> {
        self.distance.map(ProximityBand::classify)
    }

    /// Whether the institution gets a "near" badge.
    pub fn is_near(&self) -> bool {
        self.distance.is_some_and(is_near)
    }
}

impl Located for Institution {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
