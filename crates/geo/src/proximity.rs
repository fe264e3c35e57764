//! Proximity bands for presenting distances.
//!
//! The thresholds here are shared by list badges, map markers and the
//! statistics panel. Ranking and filtering never consult them.

use serde::{Deserialize, Serialize};

/// Distances strictly below this value (km) count as "near".
pub const NEAR_THRESHOLD_KM: f64 = 5.0;

/// Coarse distance classification used to pick a label and a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityBand {
    /// Under 1 km
    VeryClose,
    /// From 1 km up to (not including) 5 km
    Close,
    /// From 5 km up to (not including) 10 km
    Moderate,
    /// 10 km and beyond
    Far,
}

impl ProximityBand {
    /// Classify a distance in kilometers.
    pub fn classify(distance_km: f64) -> Self {
        if distance_km < 1.0 {
            Self::VeryClose
        } else if distance_km < NEAR_THRESHOLD_KM {
            Self::Close
        } else if distance_km < 10.0 {
            Self::Moderate
        } else {
            Self::Far
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryClose => "Très proche",
            Self::Close => "Proche",
            Self::Moderate => "Distance moyenne",
            Self::Far => "Éloigné",
        }
    }

    /// Hex colour used for badges and markers.
    pub fn color(&self) -> &'static str {
        match self {
            Self::VeryClose => "#10b981",
            Self::Close => "#3b82f6",
            Self::Moderate => "#f59e0b",
            Self::Far => "#ef4444",
        }
    }
}

/// Whether a distance earns a "near" badge.
#[inline]
pub fn is_near(distance_km: f64) -> bool {
    distance_km < NEAR_THRESHOLD_KM
}

/// Human-readable distance: metres while the rounded value stays below
/// 1000 m, kilometres with two decimals otherwise.
pub fn format_distance(distance_km: f64) -> String {
    let metres = (distance_km * 1000.0).round();
    if metres < 1000.0 {
        format!("{metres:.0} m")
    } else {
        format!("{:.2} km", distance_km)
    }
}
