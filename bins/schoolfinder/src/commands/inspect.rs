//! Inspect command - how a file is read, without ranking

use crate::commands::read_directory;
use crate::errors;
use anyhow::Result;
use schoolfinder_cli::output::format_count;
use schoolfinder_cli::Status;
use schoolfinder_directory::{load_with_report, LoadReport};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectOutput<'a> {
    file: String,
    institutions: usize,
    report: &'a LoadReport,
}

/// Run the inspect command
pub fn run(file: &Path, json: bool) -> Result<()> {
    let text = read_directory(file)?;
    let (institutions, report) = load_with_report(&text).map_err(|e| errors::directory(e, file))?;

    if json {
        let output = InspectOutput {
            file: file.display().to_string(),
            institutions: institutions.len(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    Status::header(&file.display().to_string());
    let rows = [
        ("Colonnes", report.headers.join(", ")),
        ("Lignes de données", report.data_lines.to_string()),
        ("Lignes mal formées", report.malformed_lines.to_string()),
        ("Format officiel", report.normalize.official.to_string()),
        ("Format générique", report.normalize.generic.to_string()),
        ("Rejetées", report.normalize.discarded.to_string()),
    ];
    for (label, value) in rows {
        println!("  {label:<20}{value}");
    }
    Status::success(&format_count(
        institutions.len(),
        "établissement chargé",
        "établissements chargés",
    ));

    Ok(())
}
