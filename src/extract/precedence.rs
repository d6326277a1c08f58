//! Representation precedence for rich outputs.
//!
//! Each output kind has an ordered list of representations. The first one
//! present in the output's MIME bundle produces the output's only fragment;
//! later entries are never consulted once an earlier one matched.

use serde::{Deserialize, Serialize};

use super::Fragment;
use crate::model::{Output, OutputType, MIME_HTML, MIME_PLAIN, MIME_PNG};

/// A MIME representation the extractor knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// `text/html`, emitted verbatim
    Html,
    /// `image/png`, wrapped in an inline data-URI image element
    Png,
    /// `text/plain`, wrapped in a preformatted block
    PlainText,
}

/// Precedence for `display_data` outputs.
pub const DISPLAY_PRECEDENCE: &[Representation] = &[Representation::Html, Representation::Png];

/// Precedence for `execute_result` outputs.
pub const RESULT_PRECEDENCE: &[Representation] = &[Representation::PlainText];

impl Representation {
    /// MIME type this representation reads.
    pub fn mime_type(self) -> &'static str {
        match self {
            Representation::Html => MIME_HTML,
            Representation::Png => MIME_PNG,
            Representation::PlainText => MIME_PLAIN,
        }
    }

    /// Render a payload of this representation as a fragment.
    ///
    /// Payloads are inserted as-is: HTML is trusted and plain text is not
    /// escaped.
    pub fn render(self, payload: &str) -> Fragment {
        match self {
            Representation::Html => Fragment::new(payload),
            Representation::Png => {
                Fragment::new(format!("<img src=\"data:image/png;base64,{}\" />\n", payload))
            }
            Representation::PlainText => Fragment::new(format!("<pre>{}</pre>", payload)),
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Precedence table for an output kind; empty for kinds that never render.
pub fn precedence_for(output_type: OutputType) -> &'static [Representation] {
    match output_type {
        OutputType::DisplayData => DISPLAY_PRECEDENCE,
        OutputType::ExecuteResult => RESULT_PRECEDENCE,
        OutputType::Stream | OutputType::Error | OutputType::Unknown => &[],
    }
}

/// Pick the representation an output renders as, with its fragment.
///
/// Returns `None` when the output kind never renders or none of its
/// representations are present.
pub fn select(output: &Output) -> Option<(Representation, Fragment)> {
    let data = output.data.as_ref()?;
    precedence_for(output.output_type)
        .iter()
        .find_map(|repr| data.text(repr.mime_type()).map(|payload| (*repr, repr.render(&payload))))
}
