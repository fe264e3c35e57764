//! The point all distances are measured from.

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// Label given to positions obtained from the device.
pub const DEVICE_POSITION_LABEL: &str = "Ma position actuelle";

/// A user- or device-supplied reference position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePosition {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ReferencePosition {
    /// A position given directly as coordinates.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, address: None }
    }

    /// A resolved position with a display label.
    pub fn labelled(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self { latitude, longitude, address: Some(address.into()) }
    }

    /// An address still waiting for geocoding, encoded as 0°,0° plus the text.
    pub fn pending(address: impl Into<String>) -> Self {
        Self::labelled(0.0, 0.0, address)
    }

    /// A position reported by the device.
    pub fn device(coordinate: Coordinate) -> Self {
        Self::labelled(coordinate.latitude, coordinate.longitude, DEVICE_POSITION_LABEL)
    }

    /// True when the address must be resolved before distances mean anything.
    ///
    /// Zero/zero together with an address is the "resolve me" marker, not a
    /// literal point in the Gulf of Guinea.
    pub fn needs_geocoding(&self) -> bool {
        self.latitude == 0.0
            && self.longitude == 0.0
            && self.address.as_deref().is_some_and(|a| !a.trim().is_empty())
    }

    /// The position as a plain coordinate.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl From<Coordinate> for ReferencePosition {
    fn from(coordinate: Coordinate) -> Self {
        Self::at(coordinate.latitude, coordinate.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_needs_geocoding() {
        assert!(ReferencePosition::pending("10 rue de Rivoli, Paris").needs_geocoding());
        assert!(!ReferencePosition::pending("   ").needs_geocoding());
        assert!(!ReferencePosition::at(0.0, 0.0).needs_geocoding());
        assert!(!ReferencePosition::labelled(48.85, 2.35, "Paris").needs_geocoding());
    }

    #[test]
    fn test_device_label() {
        let pos = ReferencePosition::device(Coordinate::new(45.0, 5.0));
        assert_eq!(pos.address.as_deref(), Some(DEVICE_POSITION_LABEL));
        assert_eq!(pos.coordinate(), Coordinate::new(45.0, 5.0));
    }

    #[test]
    fn test_serialization_skips_missing_address() {
        let json = serde_json::to_string(&ReferencePosition::at(1.5, 2.5)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":2.5}"#);
    }
}
