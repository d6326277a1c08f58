//! Recorded cell outputs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient, multiline, MimeBundle, MIME_PLAIN};

/// One recorded result of executing a code cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawOutput")]
pub struct Output {
    /// Output kind
    pub output_type: OutputType,

    /// MIME bundle (`display_data` and `execute_result`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MimeBundle>,

    /// Execution counter (`execute_result`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u64>,

    /// Stream name, e.g. "stdout" (`stream`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stream text (`stream`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Exception class name (`error`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ename: Option<String>,

    /// Exception message (`error`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evalue: Option<String>,

    /// Formatted traceback lines (`error`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traceback: Option<Vec<String>>,
}

/// An output as stored, before kind-dependent fields are decoded.
#[derive(Deserialize)]
struct RawOutput {
    output_type: OutputType,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    execution_count: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    text: Option<Value>,
    #[serde(default)]
    ename: Option<Value>,
    #[serde(default)]
    evalue: Option<Value>,
    #[serde(default)]
    traceback: Option<Value>,
}

impl TryFrom<RawOutput> for Output {
    type Error = serde_json::Error;

    fn try_from(raw: RawOutput) -> Result<Self, Self::Error> {
        // The MIME bundle must be well formed only where it can render.
        let data = if raw.output_type.has_mime_bundle() {
            match raw.data {
                Some(value) => serde_json::from_value(value)?,
                None => None,
            }
        } else {
            lenient::decode("data", raw.data)
        };

        Ok(Self {
            output_type: raw.output_type,
            data,
            execution_count: lenient::decode("execution_count", raw.execution_count),
            name: lenient::decode("name", raw.name),
            text: raw.text.as_ref().and_then(multiline::join_value),
            ename: lenient::decode("ename", raw.ename),
            evalue: lenient::decode("evalue", raw.evalue),
            traceback: lenient::decode("traceback", raw.traceback),
        })
    }
}

impl Output {
    /// Create an output of the given kind with no payload.
    pub fn new(output_type: OutputType) -> Self {
        Self {
            output_type,
            data: None,
            execution_count: None,
            name: None,
            text: None,
            ename: None,
            evalue: None,
            traceback: None,
        }
    }

    /// Create a `display_data` output.
    pub fn display_data(data: MimeBundle) -> Self {
        Self::new(OutputType::DisplayData).with_data(data)
    }

    /// Create an `execute_result` output with a plain text value.
    pub fn execute_result(text: impl Into<String>) -> Self {
        Self::new(OutputType::ExecuteResult).with_data(MimeBundle::new().with_text(MIME_PLAIN, text))
    }

    /// Create a `stream` output.
    pub fn stream(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut output = Self::new(OutputType::Stream);
        output.name = Some(name.into());
        output.text = Some(text.into());
        output
    }

    /// Set the MIME bundle.
    pub fn with_data(mut self, data: MimeBundle) -> Self {
        self.data = Some(data);
        self
    }

    /// Textual payload for a MIME type, if the output carries one.
    pub fn text_for(&self, mime_type: &str) -> Option<String> {
        self.data.as_ref().and_then(|data| data.text(mime_type))
    }
}

/// Kind of recorded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    /// Rich, possibly multi-representation display
    DisplayData,
    /// Value of the cell's last expression
    ExecuteResult,
    /// Text written to stdout/stderr
    Stream,
    /// Raised exception
    Error,
    /// Any other output kind
    #[serde(other)]
    Unknown,
}

impl OutputType {
    /// Check if outputs of this kind carry a renderable MIME bundle.
    pub fn has_mime_bundle(self) -> bool {
        matches!(self, OutputType::DisplayData | OutputType::ExecuteResult)
    }
}

impl std::fmt::Display for OutputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputType::DisplayData => write!(f, "display_data"),
            OutputType::ExecuteResult => write!(f, "execute_result"),
            OutputType::Stream => write!(f, "stream"),
            OutputType::Error => write!(f, "error"),
            OutputType::Unknown => write!(f, "unknown"),
        }
    }
}
