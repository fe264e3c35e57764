//! schoolfinder - rank schools by distance
//!
//! Loads a `;`-separated school directory, resolves a starting point and
//! prints the schools closest first.

use clap::{Parser, Subcommand};
use schoolfinder_cli::{report_error, Status};
use schoolfinder_core::config::Config;
use schoolfinder_core::error::exit_codes;
use schoolfinder_directory::{LevelFilter, SectorFilter};
use schoolfinder_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod errors;

use commands::{distance, inspect, rank};

/// Rank schools by distance from an address, coordinates or your position
#[derive(Parser)]
#[command(name = "schoolfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to schoolfinder.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a directory file and rank its schools by distance
    Rank {
        /// `;`-separated directory file
        file: PathBuf,

        /// Postal address to measure from
        #[arg(short, long, conflicts_with_all = ["coords", "here"])]
        address: Option<String>,

        /// Coordinates to measure from, as LAT,LON
        #[arg(long, allow_hyphen_values = true, value_parser = rank::parse_coords, conflicts_with = "here")]
        coords: Option<(f64, f64)>,

        /// Measure from the configured device position
        #[arg(long)]
        here: bool,

        /// Keep only this level (all, college, lycee)
        #[arg(short, long)]
        level: Option<LevelFilter>,

        /// Keep only this sector (all, public, private)
        #[arg(short, long)]
        sector: Option<SectorFilter>,

        /// Show at most this many schools
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Write the ranked list as CSV (file or directory)
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Report how a directory file is read, without ranking
    Inspect {
        /// `;`-separated directory file
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Great-circle distance between two points
    Distance {
        /// Latitude of the first point
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        /// Longitude of the first point
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        /// Latitude of the second point
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        /// Longitude of the second point
        #[arg(allow_negative_numbers = true)]
        lon2: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            return exit_code(e.exit_code());
        }
    };

    let telemetry = TelemetryConfig::with_level(config.schema.logging.level.clone()).verbose(cli.verbose);
    if let Err(e) = schoolfinder_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let result = match cli.command {
        Commands::Rank {
            file,
            address,
            coords,
            here,
            level,
            sector,
            limit,
            export,
            json,
        } => {
            let args = rank::RankArgs {
                file,
                reference: rank::reference_input(address, coords, here),
                level,
                sector,
                limit,
                export,
                json,
            };
            rank::run(&config, args).await
        }

        Commands::Inspect { file, json } => inspect::run(&file, json),

        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            json,
        } => distance::run((lat1, lon1), (lat2, lon2), json),
    };

    tracing::debug!(metrics = %schoolfinder_telemetry::metrics().export_json(), "Run finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<schoolfinder_core::Error>() {
            Some(coded) => {
                report_error(coded);
                exit_code(coded.exit_code())
            }
            None => {
                Status::error(&format!("{e:#}"));
                exit_code(exit_codes::FAILURE)
            }
        },
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
