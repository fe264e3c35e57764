//! CLI command implementations

pub mod distance;
pub mod inspect;
pub mod rank;

use schoolfinder_core::{Error, ResultExt};
use std::path::Path;

/// Read a directory file as UTF-8 text
pub fn read_directory(path: &Path) -> schoolfinder_core::Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path),
            _ => Error::from(e),
        })
        .context(format!("While reading {}", path.display()))?;

    String::from_utf8(bytes).map_err(|_| Error::invalid_encoding(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolfinder_core::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_read_directory_missing() {
        let err = read_directory(Path::new("/nonexistent/ecoles.csv")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn test_read_directory_rejects_latin1() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"nom;latitude;longitude\nColl\xe8ge;45.1;5.7\n").unwrap();

        let err = read_directory(file.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEncoding);
    }
}
