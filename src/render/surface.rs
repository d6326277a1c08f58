//! The contract between extraction and whatever displays the result.

use crate::error::Result;
use crate::extract::Fragment;

/// A rendering surface that receives a page's title, header, and fragments.
///
/// Fragments must be displayed verbatim and in the order received; the
/// surface performs no interpretation of its own.
pub trait RenderSurface {
    /// Set the application title.
    fn title(&mut self, title: &str);

    /// Start a page section with a header.
    fn header(&mut self, header: &str);

    /// Display one fragment.
    fn fragment(&mut self, fragment: &Fragment);

    /// Finish rendering and return the surface's output.
    fn finish(&mut self) -> Result<String>;
}

/// Write a complete page to a surface.
pub fn render_page<S: RenderSurface + ?Sized>(
    surface: &mut S,
    title: &str,
    header: &str,
    fragments: &[Fragment],
) {
    surface.title(title);
    surface.header(header);
    for fragment in fragments {
        surface.fragment(fragment);
    }
}
