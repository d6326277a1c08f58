//! Dashboard configuration: application title and page-to-notebook mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Title used when no configuration is supplied.
pub const DEFAULT_TITLE: &str = "GitHub Data Analysis Dashboard";

/// One selectable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Name shown in the page selector
    pub name: String,

    /// Section header; defaults to "<name> Outputs"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Notebook to extract, relative to the base directory
    pub path: PathBuf,
}

impl PageConfig {
    /// Create a page with the default header.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            header: None,
            path: path.into(),
        }
    }

    /// Set a custom header.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Header text for this page.
    pub fn header(&self) -> String {
        self.header
            .clone()
            .unwrap_or_else(|| format!("{} Outputs", self.name))
    }

    /// File-name friendly form of the page name.
    pub fn slug(&self) -> String {
        let slug: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        slug.trim_matches('_').to_string()
    }
}

/// Configuration for the page viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Application title
    #[serde(default = "default_title")]
    pub title: String,

    /// Pages in selector order
    pub pages: Vec<PageConfig>,

    /// Directory page paths are resolved against (working directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl DashboardConfig {
    /// Create a configuration with a title and no pages.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            base_dir: None,
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Add a page.
    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.pages.push(page);
        self
    }

    /// Set the base directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Check that there is at least one page and page names are unique.
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(Error::Config("no pages configured".into()));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if page.name.trim().is_empty() {
                return Err(Error::Config("page name must not be empty".into()));
            }
            if !seen.insert(page.name.as_str()) {
                return Err(Error::Config(format!("duplicate page name: {}", page.name)));
            }
        }

        Ok(())
    }

    /// Resolve a page's notebook path against the base directory.
    pub fn resolve_path(&self, page: &PageConfig) -> PathBuf {
        match self.base_dir {
            Some(ref base) => base.join(&page.path),
            None => page.path.clone(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
            .with_page(PageConfig::new(
                "Data Analysis",
                "notebooks/05_data_analysis.ipynb",
            ))
            .with_page(PageConfig::new(
                "Data Visualisation",
                "notebooks/06_data_visualisation.ipynb",
            ))
    }
}
