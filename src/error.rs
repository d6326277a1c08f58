//! Error types for unipynb library.

use std::io;
use thiserror::Error;

/// Result type alias for unipynb operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during notebook processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document is not a well-formed notebook.
    #[error("Notebook parsing error: {0}")]
    Parse(String),

    /// The document has no `nbformat` version marker.
    #[error("Missing nbformat version marker")]
    MissingVersion,

    /// The declared notebook format version is not supported.
    #[error("Unsupported nbformat version: {0} (expected 4)")]
    UnsupportedVersion(u64),

    /// The requested dashboard page is not configured.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Invalid dashboard configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error means the document text could not be understood
    /// as a version 4 notebook.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::MissingVersion | Error::UnsupportedVersion(_)
        )
    }

    /// Whether this error came from reading the document.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::Parse(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedVersion(3);
        assert_eq!(err.to_string(), "Unsupported nbformat version: 3 (expected 4)");

        let err = Error::PageNotFound("Summary".to_string());
        assert_eq!(err.to_string(), "Page not found: Summary");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_io_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_version_errors_are_parse_errors() {
        assert!(Error::MissingVersion.is_parse_error());
        assert!(Error::UnsupportedVersion(5).is_parse_error());
        assert!(!Error::Render("x".into()).is_parse_error());
    }
}
