//! WASM bindings for the geo crate.
//!
//! These bindings allow the distance engine to be used from JavaScript in the
//! browser page that renders the list and the map.

use crate::{distance_km, is_near, ProximityBand};
use wasm_bindgen::prelude::*;

/// Calculate distance between two coordinates.
///
/// # Returns
/// Distance in kilometers, rounded to two decimals
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    distance_km(lat1, lng1, lat2, lng2)
}

/// Band, label and colour for a distance.
///
/// # Returns
/// JSON string `{"band": ..., "label": ..., "color": ..., "near": ...}`
#[wasm_bindgen]
pub fn proximity_band(distance_km: f64) -> String {
    let band = ProximityBand::classify(distance_km);
    serde_json::json!({
        "band": band,
        "label": band.label(),
        "color": band.color(),
        "near": is_near(distance_km),
    })
    .to_string()
}
