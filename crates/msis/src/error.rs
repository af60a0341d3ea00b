//! Error types for the MSIS adapter.

use thiserror::Error;

use atmos_dataset::DatasetError;

/// Opaque error type produced by an external atmosphere model.
///
/// Model failures are surfaced to the caller unchanged; the adapter never
/// catches, translates, or retries them.
pub type ModelError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while adapting model output.
#[derive(Error, Debug)]
pub enum MsisError {
    /// The external model failed; passed through untranslated.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// The raw output rank is neither 2 (flythrough) nor 5 (grid).
    #[error("unexpected output rank {rank}: expected 2 (flythrough) or 5 (grid)")]
    UnexpectedRank { rank: usize },

    /// A catalog variable has no entry in the units table. Units are
    /// safety-relevant downstream, so this never degrades to unitless.
    #[error("unrecognized variable: {0}")]
    UnknownVariable(String),

    /// The raw output's leading axis disagrees with the variable catalog.
    #[error("output leading axis has {actual} variables, catalog has {expected}")]
    VariableCountMismatch { expected: usize, actual: usize },

    /// A timestamp string could not be parsed.
    #[error("invalid time format: {0}")]
    TimeParse(String),

    /// Dataset construction failed an internal consistency check.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, MsisError>;
