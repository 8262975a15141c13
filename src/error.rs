//! Error types for pdfmd.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a PDF to Markdown.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version in the header is not recognized.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF could not be parsed or its text could not be extracted.
    #[error("Text extraction error: {0}")]
    Extract(String),

    /// The Markdown output could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A footer pattern is not a valid regular expression.
    #[error("Invalid footer pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}

impl Error {
    /// Whether the failure happened while writing the output file.
    pub fn is_write(&self) -> bool {
        matches!(self, Error::Write { .. })
    }

    /// Whether the failure came from reading or decoding the input PDF.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            Error::Read { .. }
                | Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::Encrypted
                | Error::Extract(_)
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Extract(err.to_string()),
        }
    }
}
