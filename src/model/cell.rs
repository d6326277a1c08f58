//! Notebook cells.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient, multiline, Output};

/// One unit of a notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    /// Cell kind
    pub cell_type: CellType,

    /// Cell identifier (nbformat 4.5+)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Cell source text
    pub source: String,

    /// Free-form cell metadata
    pub metadata: Map<String, Value>,

    /// Execution counter of a code cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u64>,

    /// Recorded outputs (code cells only; absent when never executed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
}

/// A cell as stored, before kind-dependent fields are decoded.
#[derive(Deserialize)]
struct RawCell {
    cell_type: CellType,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, deserialize_with = "multiline::deserialize")]
    source: String,
    #[serde(default)]
    metadata: Option<Value>,
    #[serde(default)]
    execution_count: Option<Value>,
    #[serde(default)]
    outputs: Option<Value>,
}

impl TryFrom<RawCell> for Cell {
    type Error = serde_json::Error;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        // Only code cells carry outputs; anywhere else they are dropped unread.
        let outputs = match raw.outputs {
            Some(value) if raw.cell_type == CellType::Code => serde_json::from_value(value)?,
            Some(_) => {
                log::trace!("Dropping outputs of {} cell", raw.cell_type);
                None
            }
            None => None,
        };

        Ok(Self {
            cell_type: raw.cell_type,
            id: lenient::decode("id", raw.id),
            source: raw.source,
            metadata: lenient::decode("metadata", raw.metadata).unwrap_or_default(),
            execution_count: lenient::decode("execution_count", raw.execution_count),
            outputs,
        })
    }
}

impl Cell {
    /// Create a cell of the given kind with source text.
    pub fn new(cell_type: CellType, source: impl Into<String>) -> Self {
        Self {
            cell_type,
            id: None,
            source: source.into(),
            metadata: Map::new(),
            execution_count: None,
            outputs: None,
        }
    }

    /// Create a code cell.
    pub fn code(source: impl Into<String>) -> Self {
        Self::new(CellType::Code, source)
    }

    /// Create a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::new(CellType::Markdown, source)
    }

    /// Append a recorded output.
    pub fn with_output(mut self, output: Output) -> Self {
        self.outputs.get_or_insert_with(Vec::new).push(output);
        self
    }

    /// Check if this is a code cell.
    pub fn is_code(&self) -> bool {
        self.cell_type == CellType::Code
    }

    /// Recorded outputs, empty when absent.
    pub fn outputs(&self) -> &[Output] {
        self.outputs.as_deref().unwrap_or(&[])
    }

    /// Check if this cell has at least one recorded output.
    pub fn has_outputs(&self) -> bool {
        !self.outputs().is_empty()
    }
}

/// Kind of notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Executable code
    Code,
    /// Narrative markdown
    Markdown,
    /// Raw passthrough content
    Raw,
    /// Any other cell kind
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Code => write!(f, "code"),
            CellType::Markdown => write!(f, "markdown"),
            CellType::Raw => write!(f, "raw"),
            CellType::Unknown => write!(f, "unknown"),
        }
    }
}
