//! Rank command - load, locate, rank, filter and print

use crate::commands::read_directory;
use crate::errors;
use anyhow::Result;
use schoolfinder_cli::output::{colors_enabled, format_count, format_summary, render_table};
use schoolfinder_cli::{progress, Status};
use schoolfinder_core::config::{Config, ConfigSchema};
use schoolfinder_core::ResultExt;
use schoolfinder_directory::{
    encode, load_with_report, Institution, LevelFilter, ResultSummary, SectorFilter, Session,
};
use schoolfinder_geo::{Coordinate, ReferencePosition};
use schoolfinder_geocoder::{
    resolve, ClientConfig, FixedLocator, LocateError, NominatimGeocoder, ReferenceInput,
};
use schoolfinder_telemetry::{counters, metrics, Timer};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options of `schoolfinder rank`
pub struct RankArgs {
    /// Directory file
    pub file: PathBuf,
    /// Where to measure from, if anywhere
    pub reference: Option<ReferenceInput>,
    /// Level filter, config default when absent
    pub level: Option<LevelFilter>,
    /// Sector filter, config default when absent
    pub sector: Option<SectorFilter>,
    /// Maximum rows printed
    pub limit: Option<usize>,
    /// CSV destination
    pub export: Option<PathBuf>,
    /// JSON output
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RankOutput<'a> {
    reference: Option<&'a ReferencePosition>,
    level: LevelFilter,
    sector: SectorFilter,
    summary: &'a ResultSummary,
    institutions: &'a [Institution],
}

/// Parse `LAT,LON`
pub fn parse_coords(value: &str) -> Result<(f64, f64), String> {
    let mut parts = value.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected LAT,LON, got {value:?}"));
    };
    let number = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| format!("{:?} is not a number", s.trim()))
    };
    Ok((number(lat)?, number(lon)?))
}

/// Reference input from the mutually exclusive command-line options
pub fn reference_input(
    address: Option<String>,
    coords: Option<(f64, f64)>,
    here: bool,
) -> Option<ReferenceInput> {
    if let Some(address) = address {
        Some(ReferenceInput::Address(address))
    } else if let Some((latitude, longitude)) = coords {
        Some(ReferenceInput::Coordinates {
            latitude,
            longitude,
        })
    } else if here {
        Some(ReferenceInput::Device)
    } else {
        None
    }
}

/// Run the rank command
pub async fn run(config: &Config, args: RankArgs) -> Result<()> {
    let (level, sector) = filters(&config.schema, args.level, args.sector)?;

    let text = read_directory(&args.file)?;
    let load_timer = Timer::start("load");
    let (institutions, report) =
        load_with_report(&text).map_err(|e| errors::directory(e, &args.file))?;
    load_timer.stop();

    let registry = metrics();
    registry.increment_by(counters::ROWS_READ, report.data_lines as u64);
    registry.increment_by(counters::ROWS_MALFORMED, report.malformed_lines as u64);
    registry.increment_by(counters::ROWS_DISCARDED, report.normalize.discarded as u64);
    registry.increment_by(counters::INSTITUTIONS_LOADED, institutions.len() as u64);

    if !args.json && report.malformed_lines + report.normalize.discarded > 0 {
        Status::warning(&format!(
            "{} ignorée(s)",
            format_count(
                report.malformed_lines + report.normalize.discarded,
                "ligne",
                "lignes"
            )
        ));
    }

    let mut session = Session::new().with_filters(level, sector);
    session.replace_institutions(institutions);

    if let Some(input) = args.reference {
        let ticket = session.begin_locate();
        let position = locate(&config.schema, &input, args.json).await?;
        session.complete_locate(ticket, position);
    }

    let view = session.view();
    let summary = session.summary();
    info!(
        shown = view.len(),
        near = summary.near,
        level = %level,
        sector = %sector,
        "Ranking ready"
    );

    if let Some(ref destination) = args.export {
        let path = export_path(destination, &config.schema.export.file_name);
        std::fs::write(&path, encode(&view))
            .map_err(schoolfinder_core::Error::from)
            .context(format!("While writing {}", path.display()))?;
        Status::success(&format!("Exporté vers {}", path.display()));
    }

    let shown = args.limit.map_or(view.len(), |n| n.min(view.len()));
    if args.json {
        let output = RankOutput {
            reference: session.reference(),
            level,
            sector,
            summary: &summary,
            institutions: &view[..shown],
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if let Some(label) = session.reference().and_then(|r| r.address.as_deref()) {
            Status::info(&format!("Depuis : {label}"));
        }
        print!("{}", render_table(&view, args.limit, colors_enabled()));
        println!();
        println!("{}", format_summary(&summary));
    }

    Ok(())
}

fn filters(
    schema: &ConfigSchema,
    level: Option<LevelFilter>,
    sector: Option<SectorFilter>,
) -> Result<(LevelFilter, SectorFilter)> {
    let level = match level {
        Some(level) => level,
        None => schema.filters.level.parse().map_err(errors::filter_setting)?,
    };
    let sector = match sector {
        Some(sector) => sector,
        None => schema.filters.sector.parse().map_err(errors::filter_setting)?,
    };
    Ok((level, sector))
}

async fn locate(
    schema: &ConfigSchema,
    input: &ReferenceInput,
    quiet: bool,
) -> Result<ReferencePosition> {
    let geocoder = NominatimGeocoder::with_config(ClientConfig::from(&schema.geocoder))?;
    let locator = FixedLocator::new(
        schema
            .device
            .position()
            .map(|(lat, lon)| Coordinate::new(lat, lon)),
    );

    let is_lookup = matches!(input, ReferenceInput::Address(_));
    let spinner = if is_lookup && !quiet {
        progress::spinner("Géolocalisation de l'adresse…")
    } else {
        progress::hidden()
    };
    if is_lookup {
        metrics().increment(counters::GEOCODE_REQUESTS);
    }

    let timer = Timer::start("locate");
    let result = resolve(input, &geocoder, &locator).await;
    timer.stop();

    match result {
        Ok(position) => {
            progress::finish_success(&spinner, "Position trouvée");
            debug!(
                latitude = position.latitude,
                longitude = position.longitude,
                "Reference position set"
            );
            Ok(position)
        }
        Err(e) => {
            progress::finish_error(&spinner, &e.to_string());
            if matches!(e, LocateError::AddressNotFound { .. }) {
                metrics().increment(counters::GEOCODE_FAILURES);
            }
            Err(errors::locate(e).into())
        }
    }
}

fn export_path(destination: &Path, file_name: &str) -> PathBuf {
    if destination.is_dir() {
        destination.join(file_name)
    } else {
        destination.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        assert_eq!(parse_coords("45.19,5.72"), Ok((45.19, 5.72)));
        assert_eq!(parse_coords(" -21.1 , 55.5 "), Ok((-21.1, 55.5)));
        assert!(parse_coords("45.19").is_err());
        assert!(parse_coords("45.19,5.72,3").is_err());
        assert!(parse_coords("nord,5.72").is_err());
    }

    #[test]
    fn test_reference_input_precedence() {
        assert_eq!(reference_input(None, None, false), None);
        assert_eq!(
            reference_input(None, None, true),
            Some(ReferenceInput::Device)
        );
        assert_eq!(
            reference_input(Some("Lyon".to_string()), None, false),
            Some(ReferenceInput::Address("Lyon".to_string()))
        );
    }

    #[test]
    fn test_filters_fall_back_to_config() {
        let mut schema = ConfigSchema::default();
        schema.filters.level = "lycée".to_string();
        let (level, sector) = filters(&schema, None, Some(SectorFilter::Private)).unwrap();
        assert_eq!(level, LevelFilter::Lycee);
        assert_eq!(sector, SectorFilter::Private);

        schema.filters.sector = "associatif".to_string();
        assert!(filters(&schema, None, None).is_err());
    }

    #[test]
    fn test_export_path() {
        let dir = std::env::temp_dir();
        assert_eq!(
            export_path(&dir, "out.csv"),
            dir.join("out.csv")
        );
        assert_eq!(
            export_path(Path::new("ranked.csv"), "out.csv"),
            PathBuf::from("ranked.csv")
        );
    }
}
