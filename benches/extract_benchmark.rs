//! Benchmarks for unipynb extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test extraction performance with synthetic notebooks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

/// Creates a synthetic notebook with the given number of code cells.
///
/// Each code cell records a stream, an HTML table, a PNG image, and an
/// expression result, with a markdown cell in between.
fn create_test_notebook(cell_count: usize) -> String {
    let png = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk".repeat(16);
    let mut cells = Vec::with_capacity(cell_count * 2);

    for i in 0..cell_count {
        cells.push(json!({
            "cell_type": "markdown",
            "metadata": {},
            "source": [format!("## Section {}\n", i + 1)]
        }));
        cells.push(json!({
            "cell_type": "code",
            "execution_count": i + 1,
            "metadata": {},
            "source": ["df.describe()\n", "plt.show()"],
            "outputs": [
                {"output_type": "stream", "name": "stdout", "text": ["running\n"]},
                {
                    "output_type": "display_data",
                    "metadata": {},
                    "data": {
                        "text/html": ["<table>\n", format!("<tr><td>{}</td></tr>\n", i), "</table>"],
                        "text/plain": ["<table>"]
                    }
                },
                {
                    "output_type": "display_data",
                    "metadata": {},
                    "data": {"image/png": png, "text/plain": ["<Figure>"]}
                },
                {
                    "output_type": "execute_result",
                    "execution_count": i + 1,
                    "metadata": {},
                    "data": {"text/plain": [format!("{}", i * 42)]}
                }
            ]
        }));
    }

    json!({
        "nbformat": 4,
        "nbformat_minor": 5,
        "metadata": {"kernelspec": {"name": "python3", "language": "python"}},
        "cells": cells
    })
    .to_string()
}

/// Benchmark notebook format detection.
fn bench_format_detection(c: &mut Criterion) {
    let notebook = create_test_notebook(1);
    let non_notebook = "Not a notebook at all, just random text content";

    c.bench_function("detect_valid_notebook", |b| {
        b.iter(|| unipynb::detect_format_from_str(black_box(&notebook)).unwrap());
    });

    c.bench_function("detect_non_notebook", |b| {
        b.iter(|| unipynb::detect_format_from_str(black_box(non_notebook)).is_err());
    });
}

/// Benchmark parse-and-extract at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for cell_count in [1, 10, 100].iter() {
        let text = create_test_notebook(*cell_count);

        group.bench_function(format!("{}_cells", cell_count), |b| {
            b.iter(|| unipynb::extract_str(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the extraction walk alone on an already parsed notebook.
fn bench_fragment_walk(c: &mut Criterion) {
    let notebook = unipynb::parse_str(&create_test_notebook(100)).unwrap();

    c.bench_function("fragment_walk_100_cells", |b| {
        b.iter(|| unipynb::extract_fragments(black_box(&notebook)));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_extraction,
    bench_fragment_walk,
);
criterion_main!(benches);
