//! Display-ready HTML fragments.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A normalized, renderable HTML string derived from one output.
///
/// Fragments have no identity beyond their position in the extracted
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap an HTML string.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Borrow the HTML.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the HTML.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the fragment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.0
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize fragments as a JSON array of strings.
pub fn to_json(fragments: &[Fragment], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(fragments),
        JsonFormat::Compact => serde_json::to_string(fragments),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_basics() {
        let fragment = Fragment::new("<pre>42</pre>");
        assert_eq!(fragment, "<pre>42</pre>");
        assert_eq!(fragment.to_string(), "<pre>42</pre>");
        assert_eq!(fragment.len(), 13);
        assert_eq!(fragment.into_string(), "<pre>42</pre>");
    }

    #[test]
    fn test_to_json_compact() {
        let fragments = vec![
            Fragment::new("<p/>"),
            Fragment::new("<img src=\"data:image/png;base64,QUJD\" />\n"),
        ];
        assert_eq!(
            to_json(&fragments, JsonFormat::Compact).unwrap(),
            r#"["<p/>","<img src=\"data:image/png;base64,QUJD\" />\n"]"#
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&[Fragment::new("<pre>1</pre>")], JsonFormat::Pretty).unwrap();
        assert!(json.contains("<pre>1</pre>"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], JsonFormat::Compact).unwrap(), "[]");
    }
}
