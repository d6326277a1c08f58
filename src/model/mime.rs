//! MIME bundles attached to rich outputs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::multiline;

/// MIME type of rich HTML output.
pub const MIME_HTML: &str = "text/html";

/// MIME type of PNG raster output (base64 payload).
pub const MIME_PNG: &str = "image/png";

/// MIME type of plain text output.
pub const MIME_PLAIN: &str = "text/plain";

/// Mapping from MIME type to payload.
///
/// Payloads are kept as raw JSON so that non-textual representations such
/// as `application/json` survive a parse, but only textual payloads are
/// visible through [`MimeBundle::text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MimeBundle(BTreeMap<String, Value>);

impl MimeBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a textual payload.
    pub fn with_text(mut self, mime_type: impl Into<String>, payload: impl Into<String>) -> Self {
        self.insert(mime_type, Value::String(payload.into()));
        self
    }

    /// Insert a raw payload, replacing any previous one for the same type.
    pub fn insert(&mut self, mime_type: impl Into<String>, payload: Value) {
        self.0.insert(mime_type.into(), payload);
    }

    /// Textual payload for a MIME type.
    ///
    /// Returns `None` when the type is absent or its payload is neither a
    /// string nor a list of strings.
    pub fn text(&self, mime_type: &str) -> Option<String> {
        self.0.get(mime_type).and_then(multiline::join_value)
    }

    /// Check if a MIME type is present, textual or not.
    pub fn contains(&self, mime_type: &str) -> bool {
        self.0.contains_key(mime_type)
    }

    /// Iterate over the MIME types present.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Number of representations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_lookup() {
        let bundle = MimeBundle::new()
            .with_text(MIME_HTML, "<table></table>")
            .with_text(MIME_PLAIN, "df");

        assert_eq!(bundle.text(MIME_HTML).as_deref(), Some("<table></table>"));
        assert_eq!(bundle.text(MIME_PNG), None);
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn test_deserialize_line_list() {
        let bundle: MimeBundle =
            serde_json::from_value(json!({"image/png": ["iVBORw0", "KGgo=\n"]})).unwrap();
        assert_eq!(bundle.text(MIME_PNG).as_deref(), Some("iVBORw0KGgo=\n"));
    }

    #[test]
    fn test_non_textual_payload() {
        let bundle: MimeBundle =
            serde_json::from_value(json!({"application/json": {"a": 1}})).unwrap();
        assert!(bundle.contains("application/json"));
        assert_eq!(bundle.text("application/json"), None);
    }

    #[test]
    fn test_mime_types() {
        let bundle = MimeBundle::new()
            .with_text(MIME_PNG, "QUJD")
            .with_text(MIME_HTML, "<p/>");
        let types: Vec<_> = bundle.mime_types().collect();
        assert_eq!(types, vec!["image/png", "text/html"]);
    }
}
