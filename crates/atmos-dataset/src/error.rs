//! Error types for dataset construction.

use thiserror::Error;

/// Errors that can occur when building or reshaping a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The number of values does not match the declared shape.
    #[error("value count {actual} does not match shape {shape:?} ({expected} expected)")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// The number of dimension labels does not match the shape rank.
    #[error("{dims} dimension labels for a rank-{rank} shape")]
    DimCountMismatch { dims: usize, rank: usize },
}

/// Result type for dataset operations.
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
