//! Notebook parsing module.

mod notebook_parser;

pub use notebook_parser::NotebookParser;
