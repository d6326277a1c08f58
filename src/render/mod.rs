//! Rendering module for handing fragments to output surfaces.

mod html;
mod surface;

pub use html::{escape_html, HtmlSurface};
pub use surface::{render_page, RenderSurface};
