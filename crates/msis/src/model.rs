//! The external atmosphere model interface.
//!
//! The physics lives behind [`AtmosphereModel`]; this crate consumes the
//! interface and never reimplements it. A model exposes a calculation
//! entry point returning a dense numeric array and a fixed, ordered
//! variable catalog describing that array's leading axis.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::inputs::ModelInputs;

/// Raw model output: a dense row-major array with an explicit shape.
///
/// The contract has two valid ranks:
/// - rank 2, shape `[nvars, ntimes]` — a flythrough trace, produced only
///   when all three spatial inputs are single points;
/// - rank 5, shape `[nvars, ntimes, nalts, nlats, nlons]` — a full grid.
///
/// Any other rank is an internal-consistency error in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOutput {
    /// Row-major values.
    pub values: Vec<f64>,
    /// Axis lengths, leading axis first.
    pub shape: Vec<usize>,
}

impl RawOutput {
    /// Create a raw output from values and shape.
    pub fn new(values: Vec<f64>, shape: Vec<usize>) -> Self {
        Self { values, shape }
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}

/// An external atmosphere calculation engine.
///
/// Implementations wrap the actual physics (an FFI binding to the NRLMSIS
/// Fortran routines, a remote service, or a test stub). Errors they return
/// propagate to the adapter's caller unchanged.
pub trait AtmosphereModel {
    /// The fixed, ordered output variable catalog.
    ///
    /// The order corresponds positionally to the leading axis of the array
    /// returned by [`calculate`](Self::calculate).
    fn variables(&self) -> Vec<String>;

    /// Run the model over normalized inputs.
    fn calculate(&self, inputs: &ModelInputs) -> std::result::Result<RawOutput, ModelError>;
}
