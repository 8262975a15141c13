//! PDF header detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"
const HEADER_LEN: u64 = 16;

/// Read the header of a file and return its PDF version (e.g., "1.7").
///
/// Files shorter than a PDF header are reported as [`Error::UnknownFormat`],
/// I/O failures as [`Error::Read`].
pub fn pdf_version_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN)
        .read_to_end(&mut header)
        .map_err(read_err)?;
    pdf_version(&header)
}

/// Return the PDF version declared by the `%PDF-x.y` header in `data`.
pub fn pdf_version(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(version)
}

/// Check if a version string looks like "1.4" or "2.0".
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_valid_pdf() {
        assert_eq!(pdf_version(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap(), "1.7");
        assert_eq!(pdf_version(b"%PDF-2.0\n").unwrap(), "2.0");
    }

    #[test]
    fn test_detect_invalid_format() {
        assert!(matches!(
            pdf_version(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(pdf_version(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(matches!(pdf_version(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_bad_version() {
        assert!(matches!(
            pdf_version(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(v)) if v == "x.y"
        ));
    }

    #[test]
    fn test_short_file_is_unknown_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PD").unwrap();
        assert!(matches!(
            pdf_version_from_path(file.path()),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = pdf_version_from_path(dir.path().join("absent.pdf"));
        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
