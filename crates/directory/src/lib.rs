//! Institution directory: loading, ranking, filtering and export.
//!
//! This crate provides:
//! - A semicolon-delimited parser with quoted regions
//! - Normalization of the national dataset and of generic school lists
//! - Stable distance ranking from a reference position
//! - Level and sector filters
//! - Comma-separated export of the ranked list
//! - Session state for front ends, with stale-request protection
//!
//! # Example
//!
//! ```
//! use schoolfinder_directory::{filter, load, rank, LevelFilter, SectorFilter};
//! use schoolfinder_geo::ReferencePosition;
//!
//! let text = "nom;lat;lon;type\nCollège A;45.01;5.0;public\nLycée B;45.0;5.0;public";
//! let institutions = load(text).unwrap();
//! let ranked = rank(&institutions, &ReferencePosition::at(45.0, 5.0));
//! let colleges = filter(&ranked, LevelFilter::College, SectorFilter::All);
//!
//! assert_eq!(ranked[0].name, "Lycée B");
//! assert_eq!(colleges.len(), 1);
//! ```

pub mod tabular;
pub mod normalize;
mod institution;
mod loader;
mod ranking;
mod filter;
mod summary;
mod export;
pub mod session;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use institution::Institution;
pub use loader::{load, load_with_report, LoadReport};
pub use normalize::{normalize, normalize_all, Scheme};
pub use ranking::rank;
pub use filter::{filter, LevelFilter, SectorFilter};
pub use summary::{summarize, Nearest, ResultSummary};
pub use export::{encode, EXPORT_FILE_NAME, EXPORT_HEADER};
pub use session::{LocateTicket, Session};
pub use tabular::{parse, Record};
pub use error::{DirectoryError, DirectoryErrorCode, Result};
