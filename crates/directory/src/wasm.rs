//! WASM bindings for the directory pipeline.
//!
//! The browser page reads the dropped file, hands its text over, and gets
//! JSON back for the list and the map. Geocoding and device location stay in
//! JavaScript; only their coordinates come through here.

use crate::{encode, filter, load, rank, summarize, Institution, LevelFilter, SectorFilter};
use schoolfinder_geo::ReferencePosition;
use wasm_bindgen::prelude::*;

/// Parse and normalize file text.
///
/// # Returns
/// JSON array of institutions, or an error with the user-facing message
#[wasm_bindgen]
pub fn load_institutions(text: &str) -> Result<String, JsValue> {
    let institutions = load(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&institutions)
}

/// Rank institutions by distance from a point.
///
/// # Arguments
/// * `institutions_json` - JSON array as returned by `load_institutions`
/// * `lat` - Reference latitude
/// * `lng` - Reference longitude
#[wasm_bindgen]
pub fn rank_institutions(institutions_json: &str, lat: f64, lng: f64) -> Result<String, JsValue> {
    let institutions = from_json(institutions_json)?;
    to_json(&rank(&institutions, &ReferencePosition::at(lat, lng)))
}

/// Apply the level filter then the sector filter.
///
/// # Arguments
/// * `level` - "all", "college" or "lycee"
/// * `sector` - "all", "public" or "private"
#[wasm_bindgen]
pub fn filter_institutions(institutions_json: &str, level: &str, sector: &str) -> Result<String, JsValue> {
    let institutions = from_json(institutions_json)?;
    let level: LevelFilter = level.parse().map_err(|e: crate::DirectoryError| JsValue::from_str(&e.to_string()))?;
    let sector: SectorFilter = sector.parse().map_err(|e: crate::DirectoryError| JsValue::from_str(&e.to_string()))?;
    to_json(&filter(&institutions, level, sector))
}

/// Figures for the statistics panel.
#[wasm_bindgen]
pub fn summarize_institutions(institutions_json: &str) -> Result<String, JsValue> {
    let institutions = from_json(institutions_json)?;
    serde_json::to_string(&summarize(&institutions))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Export text for the download button.
#[wasm_bindgen]
pub fn export_csv(institutions_json: &str) -> Result<String, JsValue> {
    Ok(encode(&from_json(institutions_json)?))
}

fn from_json(json: &str) -> Result<Vec<Institution>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))
}

fn to_json(institutions: &[Institution]) -> Result<String, JsValue> {
    serde_json::to_string(institutions)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
