//! File text to institutions, with the two empty-result errors.

use crate::error::{DirectoryError, Result};
use crate::institution::Institution;
use crate::normalize::{normalize_with_report, NormalizeReport};
use crate::tabular::parse_with_report;
use serde::Serialize;
use tracing::info;

/// What a load did with the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Header field names
    pub headers: Vec<String>,
    /// Lines after the header
    pub data_lines: usize,
    /// Lines dropped for a field-count mismatch
    pub malformed_lines: usize,
    /// Per-layout normalization counts
    pub normalize: NormalizeReport,
}

/// Parse and normalize file text.
///
/// # Errors
/// [`DirectoryError::NoValidData`] when no data row survives parsing, and
/// [`DirectoryError::NoValidInstitutions`] when no row normalizes.
pub fn load(text: &str) -> Result<Vec<Institution>> {
    load_with_report(text).map(|(institutions, _)| institutions)
}

/// Like [`load`], also returning the parse and normalization counts.
pub fn load_with_report(text: &str) -> Result<(Vec<Institution>, LoadReport)> {
    let parsed = parse_with_report(text);
    if parsed.records.is_empty() {
        return Err(DirectoryError::NoValidData);
    }

    let (institutions, normalize) = normalize_with_report(&parsed.records);
    if institutions.is_empty() {
        return Err(DirectoryError::NoValidInstitutions);
    }

    let report = LoadReport {
        headers: parsed.headers,
        data_lines: parsed.data_lines,
        malformed_lines: parsed.dropped,
        normalize,
    };

    info!(
        institutions = institutions.len(),
        malformed = report.malformed_lines,
        discarded = report.normalize.discarded,
        "Loaded institutions"
    );

    Ok((institutions, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFICIAL: &str = "rentree_scolaire;uai;secteur;ips;position;appellation_officielle;libelle_academie;code_departement;libelle_departement;code_commune;libelle_commune
2022-2023;0380001A;public;103.2;45.1885,5.7245;Lycée Champollion;GRENOBLE;038;ISERE;38185;Grenoble
2022-2023;0380002B;privé sous contrat;;45.19,5.73;Collège Saint-Joseph;GRENOBLE;038;ISERE;38185;Grenoble
2022-2023;0380003C;public;98;45.2;Collège Sans Position;GRENOBLE;038;ISERE;38185;Grenoble
2022-2023;trop;court";

    #[test]
    fn test_load_official_file() {
        let (institutions, report) = load_with_report(OFFICIAL).unwrap();

        assert_eq!(institutions.len(), 2);
        assert_eq!(institutions[0].name, "Lycée Champollion");
        assert_eq!(institutions[0].kind.as_deref(), Some("public (IPS: 103.2)"));
        assert_eq!(institutions[1].kind.as_deref(), Some("privé sous contrat"));
        assert_eq!(institutions[1].id, 1);
        assert_eq!(report.data_lines, 4);
        assert_eq!(report.malformed_lines, 1);
        assert_eq!(report.normalize.official, 2);
        assert_eq!(report.normalize.discarded, 1);
    }

    #[test]
    fn test_load_generic_file() {
        let text = "nom;lat;lon;adresse\n\"École B\";45.0;5.0;\"1 rue A; Lyon\"";
        let institutions = load(text).unwrap();
        assert_eq!(institutions.len(), 1);
        assert_eq!(institutions[0].address.as_deref(), Some("1 rue A; Lyon"));
    }

    #[test]
    fn test_load_no_data() {
        assert_eq!(load(""), Err(DirectoryError::NoValidData));
        assert_eq!(load("nom;lat;lon"), Err(DirectoryError::NoValidData));
        assert_eq!(load("nom;lat;lon\nA;1"), Err(DirectoryError::NoValidData));
    }

    #[test]
    fn test_load_no_institutions() {
        assert_eq!(
            load("foo;bar\n1;2\n3;4"),
            Err(DirectoryError::NoValidInstitutions)
        );
    }
}
