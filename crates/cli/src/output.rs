//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;
use schoolfinder_core::Error;
use schoolfinder_directory::{Institution, ResultSummary};
use schoolfinder_geo::{format_distance, ProximityBand};
use std::fmt::Write as _;

/// Status message helpers
///
/// Everything goes to stderr so stdout carries only results.
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        eprintln!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        eprintln!();
        eprintln!("{}", message.bold());
        eprintln!("{}", "─".repeat(message.chars().count()));
    }
}

/// Print a coded error with its context and suggestion
pub fn report_error(error: &Error) {
    Status::error(&format!("{} {}", error.code.dimmed(), error.message));
    if let Some(ref context) = error.context {
        eprintln!("  {} {}", "context:".dimmed(), context);
    }
    if let Some(ref suggestion) = error.suggestion {
        eprintln!("  {} {}", "hint:".cyan(), suggestion);
    }
}

/// Whether stdout output should carry ANSI colors
pub fn colors_enabled() -> bool {
    console::colors_enabled()
}

/// Split a `#rrggbb` color into its components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Distance text tinted with its proximity band color
pub fn colored_distance(distance_km: f64, color: bool) -> String {
    let text = format_distance(distance_km);
    if !color {
        return text;
    }
    match parse_hex_color(ProximityBand::classify(distance_km).color()) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text,
    }
}

/// Render the ranked list as a plain-text table
///
/// At most `limit` rows are shown. Institutions without a distance show a
/// dash in the distance column.
pub fn render_table(institutions: &[Institution], limit: Option<usize>, color: bool) -> String {
    let shown = limit.map_or(institutions.len(), |n| n.min(institutions.len()));
    let rows = &institutions[..shown];

    let rank_width = shown.to_string().len().max(1);
    let name_width = rows
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Nom".len());
    let distance_width = rows
        .iter()
        .filter_map(|i| i.distance.map(|d| format_distance(d).chars().count()))
        .max()
        .unwrap_or(0)
        .max("Distance".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>rank_width$}  {:<name_width$}  {:>distance_width$}  Type",
        "#", "Nom", "Distance"
    );

    for (index, institution) in rows.iter().enumerate() {
        let distance = match institution.distance {
            Some(d) => {
                let plain = format_distance(d);
                let pad = distance_width.saturating_sub(plain.chars().count());
                format!("{}{}", " ".repeat(pad), colored_distance(d, color))
            }
            None => format!("{:>distance_width$}", "-"),
        };
        let pad = name_width.saturating_sub(institution.name.chars().count());
        let _ = writeln!(
            out,
            "{:>rank_width$}  {}{}  {}  {}",
            index + 1,
            institution.name,
            " ".repeat(pad),
            distance,
            institution.kind.as_deref().unwrap_or("")
        );
    }

    if shown < institutions.len() {
        let _ = writeln!(out, "… {} de plus", institutions.len() - shown);
    }

    out
}

/// One-paragraph description of a summary
pub fn format_summary(summary: &ResultSummary) -> String {
    let mut out = format_count(summary.total, "établissement", "établissements");
    if summary.nearest.is_some() || summary.average_distance.is_some() {
        let _ = write!(out, ", dont {} à moins de 5 km", summary.near);
    }
    if let Some(ref nearest) = summary.nearest {
        let _ = write!(
            out,
            "\nLe plus proche : {} ({})",
            nearest.name,
            format_distance(nearest.distance)
        );
    }
    if let Some(average) = summary.average_distance {
        let _ = write!(out, "\nDistance moyenne : {}", format_distance(average));
    }
    out
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolfinder_directory::Nearest;

    fn ranked() -> Vec<Institution> {
        let mut a = Institution::new(0, "Lycée Champollion", 45.19, 5.72).with_kind("Public");
        a.distance = Some(0.85);
        let mut b = Institution::new(1, "Collège Fantin Latour", 45.18, 5.71);
        b.distance = Some(12.346);
        vec![a, b]
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#10b981"), Some((0x10, 0xb9, 0x81)));
        assert_eq!(parse_hex_color("10b981"), None);
        assert_eq!(parse_hex_color("#10b98"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_colored_distance_plain() {
        assert_eq!(colored_distance(0.85, false), "850 m");
        assert!(colored_distance(0.85, true).contains("850 m"));
        assert_ne!(colored_distance(0.85, true), "850 m");
    }

    #[test]
    fn test_render_table_plain() {
        let table = render_table(&ranked(), None, false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#  Nom"));
        assert!(lines[1].starts_with("1  Lycée Champollion"));
        assert!(lines[1].contains("850 m"));
        assert!(lines[1].ends_with("Public"));
        assert!(lines[2].contains("12.35 km"));
    }

    #[test]
    fn test_render_table_limit() {
        let table = render_table(&ranked(), Some(1), false);
        assert!(table.contains("Lycée Champollion"));
        assert!(!table.contains("Fantin"));
        assert!(table.ends_with("… 1 de plus\n"));
    }

    #[test]
    fn test_render_table_without_distances() {
        let list = vec![Institution::new(0, "École", 45.0, 5.0)];
        let table = render_table(&list, None, false);
        assert!(table.lines().nth(1).unwrap().contains(" - "));
    }

    #[test]
    fn test_format_summary() {
        let summary = ResultSummary {
            total: 2,
            near: 1,
            nearest: Some(Nearest {
                name: "Lycée Champollion".to_string(),
                distance: 0.85,
            }),
            average_distance: Some(6.6),
        };
        assert_eq!(
            format_summary(&summary),
            "2 établissements, dont 1 à moins de 5 km\n\
             Le plus proche : Lycée Champollion (850 m)\n\
             Distance moyenne : 6.60 km"
        );

        let bare = ResultSummary {
            total: 1,
            ..ResultSummary::default()
        };
        assert_eq!(format_summary(&bare), "1 établissement");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "ligne", "lignes"), "1 ligne");
        assert_eq!(format_count(5, "ligne", "lignes"), "5 lignes");
    }
}
