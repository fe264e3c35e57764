//! Comma-separated export of a ranked list.
//!
//! Text columns are always quoted, numeric columns never are. The output is
//! meant for spreadsheets, not for reloading through the parser.

use crate::institution::Institution;
use std::fmt::Write;

/// Header row of the export.
pub const EXPORT_HEADER: &str = "Rang,Nom,UAI,Distance (km),Latitude,Longitude,Adresse,Type";

/// File name offered for the download.
pub const EXPORT_FILE_NAME: &str = "etablissements-classes-par-distance.csv";

/// Encode institutions in their current order, ranked from 1.
///
/// # Example
/// ```
/// use schoolfinder_directory::{encode, Institution};
///
/// let csv = encode(&[Institution::new(0, "École A", 48.8, 2.3)]);
/// assert_eq!(csv.lines().nth(1), Some("1,\"École A\",\"\",,48.8,2.3,\"\",\"\""));
/// ```
pub fn encode(institutions: &[Institution]) -> String {
    let mut out = String::with_capacity(64 * (institutions.len() + 1));
    out.push_str(EXPORT_HEADER);
    out.push('\n');

    for (index, institution) in institutions.iter().enumerate() {
        let distance = institution
            .distance
            .map(|d| d.to_string())
            .unwrap_or_default();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            index + 1,
            quote(&institution.name),
            quote(institution.external_code.as_deref().unwrap_or_default()),
            distance,
            institution.latitude,
            institution.longitude,
            quote(institution.address.as_deref().unwrap_or_default()),
            quote(institution.kind.as_deref().unwrap_or_default()),
        );
    }

    out
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
