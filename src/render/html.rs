//! Standalone HTML page surface.

use crate::error::Result;
use crate::extract::Fragment;

use super::RenderSurface;

/// Renders a page as a standalone HTML5 document.
///
/// Title and header text is escaped. Fragments are inserted verbatim, so
/// the notebook must be trusted: recorded outputs may carry scripts.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    title: Option<String>,
    body: String,
}

impl HtmlSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for HtmlSurface {
    fn title(&mut self, title: &str) {
        self.title = Some(title.to_string());
        self.body
            .push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    }

    fn header(&mut self, header: &str) {
        self.body
            .push_str(&format!("<h2>{}</h2>\n", escape_html(header)));
    }

    fn fragment(&mut self, fragment: &Fragment) {
        self.body.push_str("<div class=\"output\">\n");
        self.body.push_str(fragment.as_str());
        if !fragment.as_str().ends_with('\n') {
            self.body.push('\n');
        }
        self.body.push_str("</div>\n");
    }

    fn finish(&mut self) -> Result<String> {
        let title = self.title.as_deref().unwrap_or_default();
        let mut html = String::with_capacity(self.body.len() + 256);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\" />\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.body);
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
