//! Distance command - great-circle distance between two points

use crate::errors;
use anyhow::Result;
use schoolfinder_cli::output::{colored_distance, colors_enabled};
use schoolfinder_geo::{distance_km, Coordinate, ProximityBand};
use serde::Serialize;

#[derive(Serialize)]
struct DistanceOutput {
    from: Coordinate,
    to: Coordinate,
    distance: f64,
    band: ProximityBand,
    label: &'static str,
}

/// Run the distance command
pub fn run(from: (f64, f64), to: (f64, f64), json: bool) -> Result<()> {
    let from = Coordinate::validated(from.0, from.1).map_err(errors::coordinate)?;
    let to = Coordinate::validated(to.0, to.1).map_err(errors::coordinate)?;

    let distance = distance_km(from.latitude, from.longitude, to.latitude, to.longitude);
    let band = ProximityBand::classify(distance);

    if json {
        let output = DistanceOutput {
            from,
            to,
            distance,
            band,
            label: band.label(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}  ({})",
            colored_distance(distance, colors_enabled()),
            band.label()
        );
    }

    Ok(())
}
