//! Integration tests for the page viewer.

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use unipynb::dashboard::{Dashboard, DashboardConfig, PageConfig};
use unipynb::render::RenderSurface;
use unipynb::{Error, Fragment, Result};

/// Surface that records every call in order.
#[derive(Default)]
struct RecordingSurface {
    events: Vec<String>,
}

impl RenderSurface for RecordingSurface {
    fn title(&mut self, title: &str) {
        self.events.push(format!("title: {}", title));
    }

    fn header(&mut self, header: &str) {
        self.events.push(format!("header: {}", header));
    }

    fn fragment(&mut self, fragment: &Fragment) {
        self.events.push(format!("fragment: {}", fragment));
    }

    fn finish(&mut self) -> Result<String> {
        Ok(self.events.join("\n"))
    }
}

fn create_notebooks() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("notebooks")).unwrap();

    let analysis = json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {},
        "cells": [{
            "cell_type": "code",
            "source": "df.describe()",
            "outputs": [{"output_type": "execute_result", "data": {"text/plain": "count 10"}}]
        }]
    });
    let visualisation = json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {},
        "cells": [{
            "cell_type": "code",
            "source": "plt.show()",
            "outputs": [{"output_type": "display_data", "data": {"image/png": "QUJD"}}]
        }]
    });

    fs::write(
        dir.path().join("notebooks/05_data_analysis.ipynb"),
        analysis.to_string(),
    )
    .unwrap();
    fs::write(
        dir.path().join("notebooks/06_data_visualisation.ipynb"),
        visualisation.to_string(),
    )
    .unwrap();

    dir
}

fn dashboard_for(dir: &TempDir) -> Dashboard {
    Dashboard::new(DashboardConfig::default().with_base_dir(dir.path())).unwrap()
}

#[test]
fn test_show_analysis_page() {
    let dir = create_notebooks();
    let dashboard = dashboard_for(&dir);

    let mut surface = RecordingSurface::default();
    dashboard.show("Data Analysis", &mut surface).unwrap();

    assert_eq!(
        surface.events,
        vec![
            "title: GitHub Data Analysis Dashboard".to_string(),
            "header: Data Analysis Outputs".to_string(),
            "fragment: <pre>count 10</pre>".to_string(),
        ]
    );
}

#[test]
fn test_render_visualisation_html() {
    let dir = create_notebooks();
    let dashboard = dashboard_for(&dir);

    let html = dashboard.render_html("Data Visualisation").unwrap();
    assert!(html.contains("<h2>Data Visualisation Outputs</h2>"));
    assert!(html.contains("<img src=\"data:image/png;base64,QUJD\" />"));
}

#[test]
fn test_each_view_extracts_fresh() {
    let dir = create_notebooks();
    let dashboard = dashboard_for(&dir);

    let before = dashboard.extract("Data Analysis").unwrap();
    fs::write(
        dir.path().join("notebooks/05_data_analysis.ipynb"),
        json!({"nbformat": 4, "cells": []}).to_string(),
    )
    .unwrap();
    let after = dashboard.extract("Data Analysis").unwrap();

    assert_eq!(before.len(), 1);
    assert!(after.is_empty());
}

#[test]
fn test_failed_page_renders_nothing() {
    let dir = create_notebooks();
    fs::write(dir.path().join("notebooks/06_data_visualisation.ipynb"), "not json").unwrap();
    let dashboard = dashboard_for(&dir);

    let mut surface = RecordingSurface::default();
    let err = dashboard.show("Data Visualisation", &mut surface).unwrap_err();

    assert!(err.is_parse_error());
    assert!(surface.events.is_empty());
}

#[test]
fn test_unknown_page() {
    let dir = create_notebooks();
    let dashboard = dashboard_for(&dir);

    let err = dashboard.render_html("Overview").unwrap_err();
    assert!(matches!(err, Error::PageNotFound(ref name) if name == "Overview"));
}

#[test]
fn test_config_file() {
    let dir = create_notebooks();
    let config_path = dir.path().join("dashboard.json");
    fs::write(
        &config_path,
        json!({
            "title": "Repo Stats",
            "base_dir": dir.path(),
            "pages": [
                {"name": "Charts", "header": "All Charts", "path": "notebooks/06_data_visualisation.ipynb"}
            ]
        })
        .to_string(),
    )
    .unwrap();

    let config = DashboardConfig::from_file(&config_path).unwrap();
    let dashboard = Dashboard::new(config).unwrap();
    assert_eq!(dashboard.page_names(), vec!["Charts"]);

    let mut surface = RecordingSurface::default();
    dashboard.show("Charts", &mut surface).unwrap();
    assert_eq!(surface.events[0], "title: Repo Stats");
    assert_eq!(surface.events[1], "header: All Charts");
    assert_eq!(surface.events.len(), 3);
}

#[test]
fn test_config_file_invalid() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("dashboard.json");
    fs::write(&config_path, r#"{"title": "x"}"#).unwrap();

    let err = DashboardConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_custom_page_builder() {
    let dir = create_notebooks();
    let config = DashboardConfig::new("Custom")
        .with_base_dir(dir.path())
        .with_page(PageConfig::new("Both", "notebooks/05_data_analysis.ipynb").with_header("Numbers"));
    let dashboard = Dashboard::new(config).unwrap();

    let html = dashboard.render_html("Both").unwrap();
    assert!(html.contains("<title>Custom</title>"));
    assert!(html.contains("<h2>Numbers</h2>"));
    assert!(html.contains("<pre>count 10</pre>"));
}
