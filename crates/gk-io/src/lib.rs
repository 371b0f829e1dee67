//! gk-io: file readers for the graph kernel.
//!
//! Provides:
//! - Matrix-Market coordinate files (`read_matrix_market`)
//! - DIMACS arc lists, including flow source/sink designators (`read_dimacs`)
//!
//! Readers produce an [`EdgeList`] of 0-based triples; `EdgeList::to_graph`
//! pushes them through the builder. Malformed input fails on the first
//! problem found.

pub mod dimacs;
pub mod edge_list;
pub mod error;
pub mod matrix_market;
mod parse;

pub use dimacs::{Problem, read_dimacs, read_dimacs_file};
pub use edge_list::EdgeList;
pub use error::{ReadError, ReadResult};
pub use matrix_market::{Banner, Symmetry, ValueField, read_matrix_market, read_matrix_market_file};

use std::path::Path;

/// On-disk formats understood by [`read_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    MatrixMarket,
    Dimacs,
}

impl Format {
    /// Guess from the extension: `.mtx`/`.mm` are Matrix-Market, everything
    /// else is treated as DIMACS.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("mtx" | "mm") => Format::MatrixMarket,
            _ => Format::Dimacs,
        }
    }
}

pub fn read_file(path: &Path, format: Format) -> ReadResult<EdgeList> {
    match format {
        Format::MatrixMarket => read_matrix_market_file(path),
        Format::Dimacs => read_dimacs_file(path),
    }
}
