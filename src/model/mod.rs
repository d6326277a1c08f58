//! Notebook model types.
//!
//! This module defines the in-memory representation of an nbformat 4
//! document. Optional fields that are absent deserialize to empty values, so
//! extraction can treat them as "nothing to emit". Fields extraction never
//! reads (outputs of non-code cells, payloads of stream and error outputs)
//! are dropped when malformed rather than rejecting the document.

mod cell;
mod lenient;
mod mime;
mod multiline;
mod notebook;
mod output;

pub use cell::{Cell, CellType};
pub use mime::{MimeBundle, MIME_HTML, MIME_PLAIN, MIME_PNG};
pub use notebook::Notebook;
pub use output::{Output, OutputType};
