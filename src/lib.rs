//! # unipynb
//!
//! Extract renderable outputs from Jupyter notebooks.
//!
//! This library walks the executed code cells of an nbformat 4 document and
//! turns their recorded outputs into an ordered list of HTML fragments:
//! rich HTML is passed through, PNG images become inline `<img>` elements,
//! and expression results become `<pre>` blocks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unipynb::extract;
//!
//! fn main() -> unipynb::Result<()> {
//!     let fragments = extract("notebooks/05_data_analysis.ipynb")?;
//!     for fragment in &fragments {
//!         println!("{}", fragment);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic**: fragments follow cell order, then output order
//! - **Explicit precedence**: `text/html` over `image/png` for display data
//! - **Permissive**: missing outputs, data, or MIME keys are skipped, not errors
//! - **All-or-nothing**: I/O and parse failures never yield partial results
//! - **Parallel batches**: independent notebooks extracted with Rayon
//! - **Page viewer**: a small dashboard adapter rendering pages to HTML

pub mod dashboard;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use dashboard::{Dashboard, DashboardConfig, PageConfig};
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, detect_format_from_str, is_notebook,
    NotebookFormat,
};
pub use error::{Error, Result};
pub use extract::{
    extract_fragments, extract_with_stats, to_json, ExtractResult, ExtractionStats, Fragment,
    JsonFormat, Representation,
};
pub use model::{Cell, CellType, MimeBundle, Notebook, Output, OutputType};
pub use parser::NotebookParser;
pub use render::{HtmlSurface, RenderSurface};

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Parse a notebook file and return the document model.
///
/// # Example
///
/// ```no_run
/// use unipynb::parse_file;
///
/// let notebook = parse_file("analysis.ipynb").unwrap();
/// println!("Cells: {}", notebook.cell_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    NotebookParser::open(path)?.parse()
}

/// Parse a notebook from document text.
pub fn parse_str(text: &str) -> Result<Notebook> {
    NotebookParser::from_text(text)?.parse()
}

/// Parse a notebook from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Notebook> {
    NotebookParser::from_bytes(data)?.parse()
}

/// Parse a notebook from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Notebook> {
    NotebookParser::from_reader(reader)?.parse()
}

/// Extract display fragments from a notebook file.
///
/// Reads the whole document, parses it, and returns its fragments in cell
/// order, then output order. Fails with [`Error::Io`] if the file cannot be
/// read and with a parse error (see [`Error::is_parse_error`]) if it is not
/// a version 4 notebook; no partial result is returned in either case.
///
/// # Example
///
/// ```no_run
/// use unipynb::extract;
///
/// let fragments = extract("notebooks/06_data_visualisation.ipynb").unwrap();
/// println!("{} fragments", fragments.len());
/// ```
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Vec<Fragment>> {
    let notebook = parse_file(path)?;
    Ok(extract_fragments(&notebook))
}

/// Extract display fragments from document text.
pub fn extract_str(text: &str) -> Result<Vec<Fragment>> {
    let notebook = parse_str(text)?;
    Ok(extract_fragments(&notebook))
}

/// Extract display fragments from bytes.
pub fn extract_bytes(data: &[u8]) -> Result<Vec<Fragment>> {
    let notebook = parse_bytes(data)?;
    Ok(extract_fragments(&notebook))
}

/// Extract fragments and statistics from a notebook file.
pub fn extract_file_with_stats<P: AsRef<Path>>(path: P) -> Result<ExtractResult> {
    let notebook = parse_file(path)?;
    Ok(extract_with_stats(&notebook))
}

/// Extract several notebooks in parallel.
///
/// Results are returned in input order; each entry succeeds or fails on its
/// own.
///
/// # Example
///
/// ```no_run
/// use unipynb::extract_many;
///
/// let results = extract_many(&["a.ipynb", "b.ipynb"]);
/// for result in results {
///     match result {
///         Ok(fragments) => println!("{} fragments", fragments.len()),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// ```
pub fn extract_many<P: AsRef<Path> + Sync>(paths: &[P]) -> Vec<Result<Vec<Fragment>>> {
    paths.par_iter().map(|path| extract(path)).collect()
}

/// Extract display fragments from a notebook file using async I/O.
#[cfg(feature = "async")]
pub async fn extract_async<P: AsRef<Path>>(path: P) -> Result<Vec<Fragment>> {
    let data = tokio::fs::read(path.as_ref()).await?;
    extract_bytes(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_str_empty_notebook() {
        let fragments = extract_str(r#"{"nbformat": 4, "nbformat_minor": 5, "metadata": {}, "cells": []}"#)
            .unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_extract_str_not_json() {
        let result = extract_str("not json");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_extract_bytes_empty_data() {
        let result = extract_bytes(&[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_parse_error());
    }

    #[test]
    fn test_extract_missing_file() {
        let result = extract("/nonexistent/dir/notebook.ipynb");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_extract_str_version_3() {
        let result = extract_str(r#"{"nbformat": 3, "nbformat_minor": 0, "worksheets": []}"#);
        assert!(matches!(result, Err(Error::UnsupportedVersion(3))));
    }

    #[test]
    fn test_extract_str_no_version() {
        let result = extract_str(r#"{"cells": []}"#);
        assert!(matches!(result, Err(Error::MissingVersion)));
    }

    #[test]
    fn test_parse_reader() {
        let text = r#"{"nbformat": 4, "cells": [{"cell_type": "raw", "source": "x"}]}"#;
        let notebook = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(notebook.cell_count(), 1);
    }

    #[test]
    fn test_extract_many_keeps_order() {
        let results = extract_many(&["/nonexistent/a.ipynb", "/nonexistent/b.ipynb"]);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(r, Err(Error::Io(_)))));
    }
}
