//! Turning parsed records into institutions.
//!
//! Two layouts are recognised. The official national dataset is detected by
//! its name and position columns; anything else goes through a generic
//! resolver that accepts several spellings of each column. A record is handled
//! by exactly one of the two.

use crate::institution::Institution;
use crate::tabular::Record;
use serde::Serialize;
use tracing::debug;

/// Column holding the official name in the national dataset.
pub const OFFICIAL_NAME_KEY: &str = "appellation_officielle";
/// Column holding `"lat,lon"` in the national dataset.
pub const OFFICIAL_POSITION_KEY: &str = "position";

const OFFICIAL_CODE_KEY: &str = "uai";
const OFFICIAL_SECTOR_KEY: &str = "secteur";
const OFFICIAL_IPS_KEY: &str = "ips";
const OFFICIAL_LOCALITY_KEY: &str = "libelle_commune";
const OFFICIAL_REGION_KEY: &str = "libelle_departement";

/// Type given to official rows without a sector.
pub const DEFAULT_KIND: &str = "Établissement";

const NAME_KEYS: &[&str] = &[
    "name", "nom", "Name", "Nom", "NAME", "NOM", "etablissement", "ecole", "school",
];
const LATITUDE_KEYS: &[&str] = &["latitude", "lat", "Latitude", "Lat", "LATITUDE", "LAT"];
const LONGITUDE_KEYS: &[&str] = &[
    "longitude", "lon", "lng", "Longitude", "Lon", "Lng", "LONGITUDE", "LON", "LNG",
];
const ADDRESS_KEYS: &[&str] = &["address", "adresse", "Address", "Adresse", "ADDRESS", "ADRESSE"];
const KIND_KEYS: &[&str] = &["type", "Type", "TYPE", "category", "Category", "CATEGORY"];

/// Which layout a record follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// National dataset (`appellation_officielle` + `position`)
    Official,
    /// Any other layout, resolved by column-name candidates
    Generic,
}

impl Scheme {
    /// Pick the layout for a record.
    pub fn detect(record: &Record) -> Self {
        if field(record, OFFICIAL_NAME_KEY).is_some() && field(record, OFFICIAL_POSITION_KEY).is_some() {
            Self::Official
        } else {
            Self::Generic
        }
    }

    /// Build an institution from `record` using this layout only.
    pub fn normalize(self, record: &Record, ordinal: usize) -> Option<Institution> {
        match self {
            Self::Official => normalize_official(record, ordinal),
            Self::Generic => normalize_generic(record, ordinal),
        }
    }
}

/// Counts gathered while normalizing a batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// Accepted through the official layout
    pub official: usize,
    /// Accepted through the generic layout
    pub generic: usize,
    /// Records that produced no institution
    pub discarded: usize,
}

impl NormalizeReport {
    /// Number of institutions produced.
    pub fn accepted(&self) -> usize {
        self.official + self.generic
    }
}

/// Normalize one record, giving the result `id = ordinal`.
///
/// Returns `None` when required fields are missing or unparseable.
pub fn normalize(record: &Record, ordinal: usize) -> Option<Institution> {
    Scheme::detect(record).normalize(record, ordinal)
}

/// Normalize every record. Ids are dense over the accepted records.
pub fn normalize_all(records: &[Record]) -> Vec<Institution> {
    normalize_with_report(records).0
}

/// Normalize every record and report per-layout counts.
pub fn normalize_with_report(records: &[Record]) -> (Vec<Institution>, NormalizeReport) {
    let mut institutions = Vec::with_capacity(records.len());
    let mut report = NormalizeReport::default();

    for record in records {
        let scheme = Scheme::detect(record);
        match (scheme.normalize(record, institutions.len()), scheme) {
            (Some(institution), Scheme::Official) => {
                report.official += 1;
                institutions.push(institution);
            }
            (Some(institution), Scheme::Generic) => {
                report.generic += 1;
                institutions.push(institution);
            }
            (None, _) => report.discarded += 1,
        }
    }

    if report.discarded > 0 {
        debug!(
            discarded = report.discarded,
            accepted = report.accepted(),
            "Discarded records without usable name or coordinates"
        );
    }

    (institutions, report)
}

fn normalize_official(record: &Record, ordinal: usize) -> Option<Institution> {
    let name = field(record, OFFICIAL_NAME_KEY)?;
    let (latitude, longitude) = parse_position(field(record, OFFICIAL_POSITION_KEY)?)?;

    let locality: Vec<&str> = [OFFICIAL_LOCALITY_KEY, OFFICIAL_REGION_KEY]
        .iter()
        .filter_map(|key| field(record, key))
        .collect();
    let address = (!locality.is_empty()).then(|| locality.join(", "));

    let mut kind = field(record, OFFICIAL_SECTOR_KEY)
        .unwrap_or(DEFAULT_KIND)
        .to_string();
    if let Some(ips) = field(record, OFFICIAL_IPS_KEY) {
        kind.push_str(&format!(" (IPS: {ips})"));
    }

    Some(Institution {
        id: ordinal,
        name: name.to_string(),
        external_code: field(record, OFFICIAL_CODE_KEY).map(str::to_string),
        address,
        latitude,
        longitude,
        kind: Some(kind),
        distance: None,
    })
}

fn normalize_generic(record: &Record, ordinal: usize) -> Option<Institution> {
    let name = first_field(record, NAME_KEYS)?;
    let latitude = parse_number(first_field(record, LATITUDE_KEYS)?)?;
    let longitude = parse_number(first_field(record, LONGITUDE_KEYS)?)?;

    Some(Institution {
        id: ordinal,
        name: name.to_string(),
        external_code: None,
        address: first_field(record, ADDRESS_KEYS).map(str::to_string),
        latitude,
        longitude,
        kind: first_field(record, KIND_KEYS).map(str::to_string),
        distance: None,
    })
}

/// `"lat,lon"`; anything but exactly two numeric parts is rejected.
fn parse_position(position: &str) -> Option<(f64, f64)> {
    let parts: Vec<&str> = position.split(',').collect();
    match parts.as_slice() {
        [lat, lon] => Some((parse_number(lat)?, parse_number(lon)?)),
        _ => None,
    }
}

/// A non-empty value, if the column exists.
fn field<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// The first candidate column holding a non-empty value.
fn first_field<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| field(record, key))
}

/// Parse the leading decimal number of a value ("48.8abc" reads as 48.8).
///
/// Values without a leading number, or that overflow to infinity, are
/// rejected.
pub fn parse_number(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_official_example() {
        let r = record(&[
            ("appellation_officielle", "École A"),
            ("position", "48.8,2.3"),
            ("secteur", "public"),
        ]);
        let inst = normalize(&r, 0).unwrap();
        assert_eq!(inst.name, "École A");
        assert_eq!(inst.latitude, 48.8);
        assert_eq!(inst.longitude, 2.3);
        assert_eq!(inst.kind.as_deref(), Some("public"));
        assert_eq!(inst.address, None);
        assert_eq!(inst.external_code, None);
        assert_eq!(inst.distance, None);
    }

    #[test]
    fn test_official_full_row() {
        let r = record(&[
            ("rentree_scolaire", "2022-2023"),
            ("uai", "0380001A"),
            ("secteur", "Public"),
            ("ips", "103.2"),
            ("position", "45.1885, 5.7245"),
            ("appellation_officielle", "Lycée Champollion"),
            ("libelle_departement", "ISERE"),
            ("libelle_commune", "Grenoble"),
        ]);
        let inst = normalize(&r, 7).unwrap();
        assert_eq!(inst.id, 7);
        assert_eq!(inst.external_code.as_deref(), Some("0380001A"));
        assert_eq!(inst.address.as_deref(), Some("Grenoble, ISERE"));
        assert_eq!(inst.kind.as_deref(), Some("Public (IPS: 103.2)"));
        assert_eq!(inst.latitude, 45.1885);
        assert_eq!(inst.longitude, 5.7245);
    }

    #[test]
    fn test_official_defaults() {
        let r = record(&[
            ("appellation_officielle", "Collège Les Saules"),
            ("position", "45.0,5.0"),
            ("libelle_departement", "DROME"),
            ("ips", "95"),
        ]);
        let inst = normalize(&r, 0).unwrap();
        assert_eq!(inst.address.as_deref(), Some("DROME"));
        assert_eq!(inst.kind.as_deref(), Some("Établissement (IPS: 95)"));
    }

    #[test]
    fn test_official_bad_position_is_discarded() {
        for position in ["48.8", "48.8,2.3,1", "abc,2.3", "48.8,"] {
            let r = record(&[("appellation_officielle", "École A"), ("position", position)]);
            assert!(normalize(&r, 0).is_none(), "position {:?} should be rejected", position);
        }
    }

    #[test]
    fn test_official_failure_does_not_fall_back() {
        // Generic columns are present, but the official layout wins and fails.
        let r = record(&[
            ("appellation_officielle", "École A"),
            ("position", "48.8"),
            ("nom", "École A"),
            ("lat", "48.8"),
            ("lon", "2.3"),
        ]);
        assert!(normalize(&r, 0).is_none());
    }

    #[test]
    fn test_generic_example() {
        let r = record(&[("nom", "École B"), ("lat", "45.0"), ("lon", "5.0")]);
        let inst = normalize(&r, 0).unwrap();
        assert_eq!(inst.name, "École B");
        assert_eq!(inst.latitude, 45.0);
        assert_eq!(inst.longitude, 5.0);
        assert_eq!(inst.external_code, None);
        assert_eq!(inst.kind, None);
    }

    #[test]
    fn test_generic_candidate_order() {
        let r = record(&[
            ("school", "Third"),
            ("Nom", "Second"),
            ("name", "First"),
            ("LAT", "1"),
            ("latitude", "2"),
            ("lng", "3"),
            ("Adresse", "1 rue de la Paix"),
            ("category", "Privé"),
        ]);
        let inst = normalize(&r, 0).unwrap();
        assert_eq!(inst.name, "First");
        assert_eq!(inst.latitude, 2.0);
        assert_eq!(inst.longitude, 3.0);
        assert_eq!(inst.address.as_deref(), Some("1 rue de la Paix"));
        assert_eq!(inst.kind.as_deref(), Some("Privé"));
    }

    #[test]
    fn test_generic_empty_cell_falls_through() {
        let r = record(&[("name", ""), ("nom", "Fallback"), ("lat", "1"), ("lon", "2")]);
        assert_eq!(normalize(&r, 0).unwrap().name, "Fallback");
    }

    #[test]
    fn test_generic_missing_fields() {
        assert!(normalize(&record(&[("lat", "1"), ("lon", "2")]), 0).is_none());
        assert!(normalize(&record(&[("nom", "A"), ("lon", "2")]), 0).is_none());
        assert!(normalize(&record(&[("nom", "A"), ("lat", "1")]), 0).is_none());
        assert!(normalize(&record(&[("nom", "A"), ("lat", "x"), ("lon", "2")]), 0).is_none());
    }

    #[test]
    fn test_ids_dense_over_accepted_rows() {
        let records = vec![
            record(&[("nom", "A"), ("lat", "1"), ("lon", "1")]),
            record(&[("nom", "broken"), ("lat", "?"), ("lon", "1")]),
            record(&[("appellation_officielle", "B"), ("position", "2,2")]),
            record(&[("appellation_officielle", "C"), ("position", "nope")]),
            record(&[("nom", "D"), ("lat", "3"), ("lon", "3")]),
        ];
        let (institutions, report) = normalize_with_report(&records);

        let ids: Vec<usize> = institutions.iter().map(|i| i.id).collect();
        let names: Vec<&str> = institutions.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(names, vec!["A", "B", "D"]);
        assert_eq!(report, NormalizeReport { official: 1, generic: 2, discarded: 2 });
    }

    #[test]
    fn test_scheme_normalize_matches_detection() {
        let both = record(&[
            ("appellation_officielle", "Officiel"),
            ("position", "48.8,2.3"),
            ("nom", "Générique"),
            ("lat", "1"),
            ("lon", "1"),
        ]);
        assert_eq!(Scheme::detect(&both), Scheme::Official);
        assert_eq!(normalize(&both, 0), Scheme::Official.normalize(&both, 0));
        assert_eq!(Scheme::Generic.normalize(&both, 0).unwrap().name, "Générique");

        let (institutions, report) = normalize_with_report(std::slice::from_ref(&both));
        assert_eq!(institutions[0].name, "Officiel");
        assert_eq!(report.official, 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_all(&[]).is_empty());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("48.8"), Some(48.8));
        assert_eq!(parse_number("  -0.5792"), Some(-0.5792));
        assert_eq!(parse_number("+2"), Some(2.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("48.8abc"), Some(48.8));
        assert_eq!(parse_number("45,7"), Some(45.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2e"), Some(2.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1e999"), None);
    }
}
