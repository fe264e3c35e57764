//! Figures for the statistics panel.

use crate::institution::Institution;
use schoolfinder_geo::round_km;
use serde::Serialize;

/// The closest institution of a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nearest {
    /// Institution name
    pub name: String,
    /// Distance in kilometers
    pub distance: f64,
}

/// Aggregate figures over a ranked and filtered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSummary {
    /// Number of institutions shown
    pub total: usize,
    /// How many are under 5 km
    pub near: usize,
    /// Closest institution, if distances are known
    pub nearest: Option<Nearest>,
    /// Mean distance, rounded to two decimals
    pub average_distance: Option<f64>,
}

/// Summarize a result set. Institutions without a distance only count
/// towards `total`.
pub fn summarize(institutions: &[Institution]) -> ResultSummary {
    let mut summary = ResultSummary {
        total: institutions.len(),
        ..ResultSummary::default()
    };

    let mut sum = 0.0;
    let mut measured = 0usize;
    for institution in institutions {
        let Some(distance) = institution.distance else {
            continue;
        };
        sum += distance;
        measured += 1;
        if institution.is_near() {
            summary.near += 1;
        }
        if summary.nearest.as_ref().is_none_or(|n| distance < n.distance) {
            summary.nearest = Some(Nearest {
                name: institution.name.clone(),
                distance,
            });
        }
    }

    if measured > 0 {
        summary.average_distance = Some(round_km(sum / measured as f64));
    }

    summary
}
