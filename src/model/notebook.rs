//! Document-level types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Cell;
use crate::detect::SUPPORTED_NBFORMAT;

/// A parsed notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Format major version
    pub nbformat: u64,

    /// Format minor version
    #[serde(default)]
    pub nbformat_minor: u64,

    /// Notebook metadata (kernelspec, language_info, ...)
    #[serde(default)]
    pub metadata: Map<String, Value>,

    /// Cells in document order
    pub cells: Vec<Cell>,
}

impl Notebook {
    /// Create a new empty version 4 notebook.
    pub fn new() -> Self {
        Self {
            nbformat: SUPPORTED_NBFORMAT,
            nbformat_minor: 5,
            metadata: Map::new(),
            cells: Vec::new(),
        }
    }

    /// Add a cell to the notebook.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Add a cell, builder style.
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.add_cell(cell);
        self
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the notebook has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over code cells in document order.
    pub fn code_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_code())
    }

    /// Kernel name from `metadata.kernelspec.name`.
    pub fn kernel_name(&self) -> Option<&str> {
        self.metadata
            .get("kernelspec")
            .and_then(|spec| spec.get("name"))
            .and_then(Value::as_str)
    }

    /// Language from `metadata.language_info.name`, falling back to the
    /// kernelspec language.
    pub fn language(&self) -> Option<&str> {
        self.metadata
            .get("language_info")
            .and_then(|info| info.get("name"))
            .or_else(|| {
                self.metadata
                    .get("kernelspec")
                    .and_then(|spec| spec.get("language"))
            })
            .and_then(Value::as_str)
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}
