//! Walks code cells and turns their recorded outputs into fragments.

use crate::model::{Notebook, OutputType};

use super::precedence::select;
use super::{ExtractResult, ExtractionStats, Fragment};

/// Extract display fragments from a notebook.
///
/// Fragments come out in cell order, then output order within a cell.
/// Non-code cells, cells without outputs, and outputs with nothing
/// renderable contribute nothing.
pub fn extract_fragments(notebook: &Notebook) -> Vec<Fragment> {
    extract_with_stats(notebook).fragments
}

/// Extract display fragments and collect statistics on the way.
pub fn extract_with_stats(notebook: &Notebook) -> ExtractResult {
    let mut fragments = Vec::new();
    let mut stats = ExtractionStats::new();
    stats.cell_count = notebook.cell_count();

    for (index, cell) in notebook.cells.iter().enumerate() {
        if !cell.is_code() {
            log::trace!("Cell {}: skipping {} cell", index, cell.cell_type);
            continue;
        }
        stats.code_cell_count += 1;

        let outputs = cell.outputs();
        if outputs.is_empty() {
            log::debug!("Cell {}: no outputs", index);
            continue;
        }
        stats.executed_cell_count += 1;

        for (position, output) in outputs.iter().enumerate() {
            stats.output_count += 1;

            if output.output_type == OutputType::Unknown {
                log::warn!("Cell {} output {}: unknown output type", index, position);
            }

            match select(output) {
                Some((repr, fragment)) => {
                    log::trace!(
                        "Cell {} output {}: {} fragment ({} bytes)",
                        index,
                        position,
                        repr,
                        fragment.len()
                    );
                    stats.add_fragment(repr);
                    fragments.push(fragment);
                }
                None => {
                    log::debug!(
                        "Cell {} output {}: nothing to render for {}",
                        index,
                        position,
                        output.output_type
                    );
                    stats.skipped_output_count += 1;
                }
            }
        }
    }

    ExtractResult::new(fragments, stats)
}
