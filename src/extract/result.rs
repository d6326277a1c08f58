//! Extraction result with statistics.

use serde::{Deserialize, Serialize};

use super::{Fragment, Representation};

/// Result of extracting a notebook, including fragments and statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Fragments in cell order, then output order
    pub fragments: Vec<Fragment>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl ExtractResult {
    /// Create a result from fragments and statistics.
    pub fn new(fragments: Vec<Fragment>, stats: ExtractionStats) -> Self {
        Self { fragments, stats }
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Statistics collected during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of cells
    pub cell_count: usize,

    /// Number of code cells
    pub code_cell_count: usize,

    /// Code cells with at least one recorded output
    pub executed_cell_count: usize,

    /// Outputs inspected (code cells only)
    pub output_count: usize,

    /// Outputs that produced no fragment
    pub skipped_output_count: usize,

    /// Fragments rendered from `text/html`
    pub html_count: usize,

    /// Fragments rendered from `image/png`
    pub image_count: usize,

    /// Fragments rendered from `text/plain`
    pub text_count: usize,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an emitted fragment of the given representation.
    pub fn add_fragment(&mut self, repr: Representation) {
        match repr {
            Representation::Html => self.html_count += 1,
            Representation::Png => self.image_count += 1,
            Representation::PlainText => self.text_count += 1,
        }
    }

    /// Total fragments emitted.
    pub fn fragment_count(&self) -> usize {
        self.html_count + self.image_count + self.text_count
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.cell_count += other.cell_count;
        self.code_cell_count += other.code_cell_count;
        self.executed_cell_count += other.executed_cell_count;
        self.output_count += other.output_count;
        self.skipped_output_count += other.skipped_output_count;
        self.html_count += other.html_count;
        self.image_count += other.image_count;
        self.text_count += other.text_count;
    }
}
