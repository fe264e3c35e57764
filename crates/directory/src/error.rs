//! Error types for the directory crate.

use thiserror::Error;

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur while loading or querying institutions.
///
/// Malformed rows never produce an error on their own; they are dropped.
/// Only an empty outcome is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The parser accepted no data row
    #[error("Le fichier ne contient aucune donnée valide")]
    NoValidData,

    /// Rows were parsed but none normalized into an institution
    #[error("Aucun établissement valide trouvé. Vérifiez le format des données.")]
    NoValidInstitutions,

    /// Unrecognised level filter
    #[error("Niveau inconnu: {0} (attendu: all, college, lycee)")]
    UnknownLevel(String),

    /// Unrecognised sector filter
    #[error("Secteur inconnu: {0} (attendu: all, public, private)")]
    UnknownSector(String),
}

/// Error code for integration with schoolfinder-core error handling.
/// Range: 11xxx for directory errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorCode {
    /// No parsed rows
    NoValidData = 11001,
    /// No normalized institutions
    NoValidInstitutions = 11002,
    /// Unknown level filter
    UnknownLevel = 11003,
    /// Unknown sector filter
    UnknownSector = 11004,
}

impl DirectoryError {
    /// Returns the error code for this error.
    pub fn code(&self) -> DirectoryErrorCode {
        match self {
            DirectoryError::NoValidData => DirectoryErrorCode::NoValidData,
            DirectoryError::NoValidInstitutions => DirectoryErrorCode::NoValidInstitutions,
            DirectoryError::UnknownLevel(_) => DirectoryErrorCode::UnknownLevel,
            DirectoryError::UnknownSector(_) => DirectoryErrorCode::UnknownSector,
        }
    }
}
