//! Semicolon-delimited tabular text.
//!
//! The first line names the fields. Every following line is split on `;`,
//! where a double quote toggles a region in which `;` is plain text. There is
//! no escaping of quotes inside a quoted region. A line whose field count
//! differs from the header is dropped without complaint.

use std::collections::HashMap;
use tracing::debug;

/// Field separator. Not configurable.
pub const DELIMITER: char = ';';

/// One parsed row: field name to value.
pub type Record = HashMap<String, String>;

/// Parser output with bookkeeping about dropped lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Field names from the header line
    pub headers: Vec<String>,
    /// Accepted rows, in file order
    pub records: Vec<Record>,
    /// Number of lines after the header
    pub data_lines: usize,
    /// Lines dropped because their field count did not match the header
    pub dropped: usize,
}

/// Parse delimited text into records.
///
/// Text with no data line yields an empty vector.
///
/// # Example
/// ```
/// use schoolfinder_directory::tabular::parse;
///
/// let records = parse("a;b\n\"x;y\";z");
/// assert_eq!(records[0]["a"], "x;y");
/// assert_eq!(records[0]["b"], "z");
/// ```
pub fn parse(text: &str) -> Vec<Record> {
    parse_with_report(text).records
}

/// Parse delimited text, also reporting how many lines were dropped.
pub fn parse_with_report(text: &str) -> ParseOutcome {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines();

    let Some(header_line) = lines.next() else {
        return ParseOutcome::default();
    };
    let headers: Vec<String> = header_line.split(DELIMITER).map(clean_header).collect();

    let mut outcome = ParseOutcome {
        headers,
        ..ParseOutcome::default()
    };

    for line in lines {
        outcome.data_lines += 1;
        let values = split_line(line);
        if values.len() != outcome.headers.len() {
            outcome.dropped += 1;
            continue;
        }
        let record = outcome
            .headers
            .iter()
            .cloned()
            .zip(values.iter().map(|v| clean_value(v)))
            .collect();
        outcome.records.push(record);
    }

    if outcome.dropped > 0 {
        debug!(
            dropped = outcome.dropped,
            data_lines = outcome.data_lines,
            columns = outcome.headers.len(),
            "Dropped rows with mismatched field count"
        );
    }

    outcome
}

/// Split one data line, honouring quoted regions.
///
/// The toggling quote characters are consumed and never reach a field.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

fn clean_header(cell: &str) -> String {
    cell.trim().replace(['"', '\''], "").trim().to_string()
}

// Apostrophes are part of names ("Lycée d'Arsonval"), so only double quotes go.
fn clean_value(cell: &str) -> String {
    cell.trim().replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_row() {
        let records = parse("a;b;c\n1;2;3");
        assert_eq!(records.len(), 1);
        let expected: Record = [("a", "1"), ("b", "2"), ("c", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(records[0], expected);
    }

    #[test]
    fn test_quoted_delimiter_is_literal() {
        let records = parse("a;b\n\"x;y\";z");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["a"], "x;y");
        assert_eq!(records[0]["b"], "z");
    }

    #[test]
    fn test_mismatched_rows_are_dropped() {
        let outcome = parse_with_report("a;b;c\n1;2;3\n1;2\n1;2;3;4\n4;5;6");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.data_lines, 4);
        assert_eq!(outcome.dropped, 2);
        assert_eq!(outcome.records[1]["c"], "6");
    }

    #[test]
    fn test_no_data_lines() {
        assert!(parse("").is_empty());
        assert!(parse("a;b;c").is_empty());
        assert!(parse("a;b;c\n").is_empty());
    }

    #[test]
    fn test_header_cleanup() {
        let outcome = parse_with_report("\"nom\" ; 'lat' ;lon\nA;1;2");
        assert_eq!(outcome.headers, vec!["nom", "lat", "lon"]);
        assert_eq!(outcome.records[0]["lat"], "1");
    }

    #[test]
    fn test_values_trimmed_and_apostrophes_kept() {
        let records = parse("nom;ville\n  Lycée d'Arsonval ; \" Brive \"");
        assert_eq!(records[0]["nom"], "Lycée d'Arsonval");
        assert_eq!(records[0]["ville"], "Brive");
    }

    #[test]
    fn test_crlf_and_bom() {
        let records = parse("\u{feff}a;b\r\n1;2\r\n3;4\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["a"], "1");
        assert_eq!(records[1]["b"], "4");
    }

    #[test]
    fn test_blank_line_is_dropped_for_multi_column_header() {
        let outcome = parse_with_report("a;b\n1;2\n\n3;4");
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn test_split_line_empty_fields() {
        assert_eq!(split_line(";;"), vec!["", "", ""]);
        assert_eq!(split_line(""), vec![""]);
        assert_eq!(split_line("\"a;b;c\""), vec!["a;b;c"]);
    }

    #[test]
    fn test_unterminated_quote_swallows_rest_of_line() {
        // Only one field comes out, so the row is dropped for a two-column header.
        let outcome = parse_with_report("a;b\n\"x;y");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.dropped, 1);
    }
}
