//! Notebook document parser using serde_json.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::detect::{detect_format_from_str, NotebookFormat};
use crate::error::{Error, Result};
use crate::model::Notebook;

/// Notebook document parser.
///
/// Holds the full document text; the version marker is validated when the
/// parser is created, the cell structure when [`NotebookParser::parse`] runs.
pub struct NotebookParser {
    text: String,
    format: NotebookFormat,
}

impl NotebookParser {
    /// Open a notebook file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading notebook {}", path.display());
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a notebook from document text.
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let format = detect_format_from_str(&text)?;
        Ok(Self { text, format })
    }

    /// Parse a notebook from bytes (must be UTF-8).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::Parse(format!("document is not valid UTF-8: {}", e)))?;
        Self::from_text(text)
    }

    /// Parse a notebook from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Declared format version.
    pub fn format(&self) -> NotebookFormat {
        self.format
    }

    /// Parse the document into a [`Notebook`].
    pub fn parse(&self) -> Result<Notebook> {
        let notebook: Notebook = serde_json::from_str(&self.text)?;
        log::debug!(
            "Parsed {} with {} cells",
            self.format,
            notebook.cell_count()
        );
        Ok(notebook)
    }
}
