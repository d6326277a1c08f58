//! Two-page notebook viewer.
//!
//! A thin adapter: it maps a selected page name to a notebook path, runs the
//! extractor once per page view, and hands the fragments to a
//! [`RenderSurface`](crate::render::RenderSurface).
//!
//! # Example
//!
//! ```no_run
//! use unipynb::dashboard::Dashboard;
//!
//! fn main() -> unipynb::Result<()> {
//!     let dashboard = Dashboard::with_defaults();
//!     let html = dashboard.render_html("Data Analysis")?;
//!     std::fs::write("data_analysis.html", html)?;
//!     Ok(())
//! }
//! ```

mod config;

pub use config::{DashboardConfig, PageConfig, DEFAULT_TITLE};

use crate::error::{Error, Result};
use crate::extract::Fragment;
use crate::render::{render_page, HtmlSurface, RenderSurface};

/// Page viewer over a [`DashboardConfig`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
}

impl Dashboard {
    /// Create a dashboard, validating the configuration.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Dashboard with the built-in analysis and visualisation pages.
    pub fn with_defaults() -> Self {
        Self {
            config: DashboardConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Application title.
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Page names in selector order.
    pub fn page_names(&self) -> Vec<&str> {
        self.config.pages.iter().map(|p| p.name.as_str()).collect()
    }

    /// Look up a page by name.
    pub fn page(&self, name: &str) -> Result<&PageConfig> {
        self.config
            .pages
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::PageNotFound(name.to_string()))
    }

    /// Extract the fragments for a page.
    pub fn extract(&self, name: &str) -> Result<Vec<Fragment>> {
        let page = self.page(name)?;
        let path = self.config.resolve_path(page);
        log::info!("Showing page '{}' from {}", page.name, path.display());
        crate::extract(&path)
    }

    /// Show a page on a surface.
    ///
    /// Extraction completes before anything is written, so a failing page
    /// leaves the surface untouched.
    pub fn show<S: RenderSurface + ?Sized>(&self, name: &str, surface: &mut S) -> Result<()> {
        let page = self.page(name)?;
        let fragments = self.extract(name)?;
        render_page(surface, &self.config.title, &page.header(), &fragments);
        Ok(())
    }

    /// Render a page as a standalone HTML document.
    pub fn render_html(&self, name: &str) -> Result<String> {
        let mut surface = HtmlSurface::new();
        self.show(name, &mut surface)?;
        surface.finish()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::with_defaults()
    }
}
