//! Terminal front-end helpers for schoolfinder
//!
//! Provides shared CLI functionality:
//! - Result tables and summaries
//! - Progress indicators
//! - Status and error messages

#![warn(missing_docs)]

pub mod output;
pub mod progress;

pub use output::{report_error, Status};
