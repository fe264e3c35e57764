//! Mapping of library errors onto coded errors and exit codes

use schoolfinder_core::{Error, ErrorCode};
use schoolfinder_directory::DirectoryError;
use schoolfinder_geo::GeoError;
use schoolfinder_geocoder::LocateError;
use std::path::Path;

/// Loading or filter-parsing failure
pub fn directory(err: DirectoryError, path: &Path) -> Error {
    let context = format!("While loading {}", path.display());
    match err {
        DirectoryError::NoValidData => {
            Error::data(ErrorCode::NoValidData, err.to_string()).with_context(context)
        }
        DirectoryError::NoValidInstitutions => {
            Error::data(ErrorCode::NoValidInstitutions, err.to_string()).with_context(context)
        }
        DirectoryError::UnknownLevel(_) | DirectoryError::UnknownSector(_) => {
            Error::validation(err.to_string())
        }
    }
}

/// Filter value from the configuration file that does not parse
pub fn filter_setting(err: DirectoryError) -> Error {
    Error::config_invalid(err.to_string())
        .with_suggestion("Use all, college or lycee for [filters] level and all, public or private for sector")
}

/// Reference position failure
pub fn locate(err: LocateError) -> Error {
    match err {
        LocateError::EmptyAddress => Error::validation(err.to_string()),
        LocateError::AddressNotFound { ref query } => {
            let context = format!("Address: {query}");
            Error::location(ErrorCode::AddressNotFound, err.to_string())
                .with_context(context)
                .with_suggestion("Check the spelling or add the postcode and town")
        }
        LocateError::PositionUnavailable => {
            Error::location(ErrorCode::PositionUnavailable, err.to_string())
                .with_suggestion("Set [device] latitude and longitude in the configuration file")
        }
        LocateError::OutOfRange(_) => Error::location(ErrorCode::CoordinateOutOfRange, err.to_string()),
    }
}

/// Coordinate typed on the command line is out of range
pub fn coordinate(err: GeoError) -> Error {
    Error::location(ErrorCode::CoordinateOutOfRange, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolfinder_core::error::exit_codes;

    #[test]
    fn test_directory_errors_are_data_errors() {
        let err = directory(DirectoryError::NoValidInstitutions, Path::new("ecoles.csv"));
        assert_eq!(err.code, ErrorCode::NoValidInstitutions);
        assert_eq!(err.exit_code(), exit_codes::DATA_ERROR);
        assert_eq!(err.context.as_deref(), Some("While loading ecoles.csv"));
    }

    #[test]
    fn test_locate_errors_are_location_errors() {
        let err = locate(LocateError::AddressNotFound {
            query: "Atlantide".to_string(),
        });
        assert_eq!(err.code, ErrorCode::AddressNotFound);
        assert_eq!(err.message, "Impossible de géolocaliser cette adresse");
        assert_eq!(err.exit_code(), exit_codes::LOCATION_ERROR);

        let err = locate(LocateError::EmptyAddress);
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_ERROR);
    }

    #[test]
    fn test_filter_setting_is_config_error() {
        let err = filter_setting(DirectoryError::UnknownLevel("primaire".to_string()));
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }
}
