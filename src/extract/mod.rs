//! Output extraction: notebook in, ordered HTML fragments out.
//!
//! # Example
//!
//! ```
//! use unipynb::extract::{extract_fragments, Fragment};
//! use unipynb::model::{Cell, Notebook, Output};
//!
//! let notebook = Notebook::new().with_cell(Cell::code("6 * 7").with_output(Output::execute_result("42")));
//! assert_eq!(extract_fragments(&notebook), vec![Fragment::new("<pre>42</pre>")]);
//! ```

mod extractor;
mod fragment;
pub mod precedence;
mod result;

pub use extractor::{extract_fragments, extract_with_stats};
pub use fragment::{to_json, Fragment, JsonFormat};
pub use precedence::{Representation, DISPLAY_PRECEDENCE, RESULT_PRECEDENCE};
pub use result::{ExtractResult, ExtractionStats};
