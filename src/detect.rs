//! Notebook format detection and version validation.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The only notebook format major version this crate understands.
pub const SUPPORTED_NBFORMAT: u64 = 4;

/// Notebook format information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotebookFormat {
    /// Major format version (always 4 once detected)
    pub major: u64,
    /// Minor format version (0 when not declared)
    pub minor: u64,
}

impl std::fmt::Display for NotebookFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "nbformat {}.{}", self.major, self.minor)
    }
}

/// Only the version marker fields; everything else is skipped.
#[derive(Deserialize)]
struct VersionProbe {
    nbformat: Option<u64>,
    nbformat_minor: Option<u64>,
}

/// Detect the notebook format from a file path.
///
/// # Example
/// ```no_run
/// use unipynb::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("analysis.ipynb").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<NotebookFormat> {
    let data = fs::read(path)?;
    detect_format_from_bytes(&data)
}

/// Detect the notebook format from raw bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<NotebookFormat> {
    let probe: VersionProbe = serde_json::from_slice(data)?;
    check_version(probe)
}

/// Detect the notebook format from document text.
///
/// # Returns
/// * `Ok(NotebookFormat)` for an nbformat 4 document
/// * `Err(Error::Parse)` if the text is not a JSON object
/// * `Err(Error::MissingVersion)` if `nbformat` is absent
/// * `Err(Error::UnsupportedVersion)` for any other major version
pub fn detect_format_from_str(text: &str) -> Result<NotebookFormat> {
    let probe: VersionProbe = serde_json::from_str(text)?;
    check_version(probe)
}

fn check_version(probe: VersionProbe) -> Result<NotebookFormat> {
    let major = probe.nbformat.ok_or(Error::MissingVersion)?;
    if major != SUPPORTED_NBFORMAT {
        return Err(Error::UnsupportedVersion(major));
    }

    Ok(NotebookFormat {
        major,
        minor: probe.nbformat_minor.unwrap_or(0),
    })
}

/// Check if a file is a version 4 notebook.
pub fn is_notebook<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes hold a version 4 notebook.
pub fn is_notebook_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
