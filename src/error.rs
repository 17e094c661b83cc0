//! Construction errors for puzzle variants.
//!
//! The search engine never fails: an unreachable goal is reported as an
//! absent solution. Everything that can go wrong happens while building a
//! puzzle from raw input, and is reported here before any search starts.

use thiserror::Error;

/// Errors raised when a puzzle is constructed from inconsistent input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("target grid is {target_rows}x{target_cols} but start grid is {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        target_rows: usize,
        target_cols: usize,
    },

    #[error("unknown marker {marker:?} at row {row}, column {col}")]
    UnknownMarker { row: usize, col: usize, marker: char },

    #[error("invalid tile symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol {
        row: usize,
        col: usize,
        symbol: String,
    },

    #[error("{word:?} is not a lowercase ASCII word")]
    InvalidWord { word: String },

    #[error("cannot step from {from:?} to {to:?}: words differ in length")]
    WordLengthMismatch { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
