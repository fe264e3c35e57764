//! Level and sector filters.
//!
//! Both filters match case-insensitive substrings, with and without accents.
//! The level filter looks at the name, the sector filter at the type.

use crate::error::DirectoryError;
use crate::institution::Institution;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const COLLEGE_MARKERS: [&str; 2] = ["collège", "college"];
const LYCEE_MARKERS: [&str; 2] = ["lycée", "lycee"];
const PUBLIC_MARKERS: [&str; 1] = ["public"];
const PRIVATE_MARKERS: [&str; 2] = ["privé", "prive"];

/// Education tier filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    /// No restriction
    #[default]
    All,
    /// Lower-secondary schools
    College,
    /// Upper-secondary schools
    Lycee,
}

impl LevelFilter {
    /// Whether an institution passes this filter.
    pub fn matches(&self, institution: &Institution) -> bool {
        match self {
            Self::All => true,
            Self::College => contains_any(&institution.name, &COLLEGE_MARKERS),
            Self::Lycee => contains_any(&institution.name, &LYCEE_MARKERS),
        }
    }

    /// Short identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::College => "college",
            Self::Lycee => "lycee",
        }
    }
}

impl FromStr for LevelFilter {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "tous" => Ok(Self::All),
            "college" | "collège" | "colleges" | "collèges" => Ok(Self::College),
            "lycee" | "lycée" | "lycees" | "lycées" => Ok(Self::Lycee),
            _ => Err(DirectoryError::UnknownLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public/private filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorFilter {
    /// No restriction
    #[default]
    All,
    /// Public institutions
    Public,
    /// Private institutions
    Private,
}

impl SectorFilter {
    /// Whether an institution passes this filter. Institutions without a
    /// type only pass `All`.
    pub fn matches(&self, institution: &Institution) -> bool {
        let markers: &[&str] = match self {
            Self::All => return true,
            Self::Public => &PUBLIC_MARKERS,
            Self::Private => &PRIVATE_MARKERS,
        };
        institution
            .kind
            .as_deref()
            .is_some_and(|kind| contains_any(kind, markers))
    }

    /// Short identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl FromStr for SectorFilter {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "tous" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "private" | "prive" | "privé" => Ok(Self::Private),
            _ => Err(DirectoryError::UnknownSector(s.to_string())),
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep institutions passing the level filter, then the sector filter.
///
/// Survivors keep their order and their distances.
pub fn filter(
    institutions: &[Institution],
    level: LevelFilter,
    sector: SectorFilter,
) -> Vec<Institution> {
    institutions
        .iter()
        .filter(|institution| level.matches(institution))
        .filter(|institution| sector.matches(institution))
        .cloned()
        .collect()
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    let text_lower = text.to_lowercase();
    markers.iter().any(|marker| text_lower.contains(marker))
}
