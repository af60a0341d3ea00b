//! Adapter for NRLMSIS-family atmosphere models.
//!
//! This crate turns heterogeneous scalar-or-array inputs into the
//! uniformly-shaped arrays an external MSIS calculation engine expects,
//! invokes the engine through the [`AtmosphereModel`] trait, and packages
//! the raw numeric result into a labeled [`Dataset`] with named dimensions,
//! coordinate values, and per-variable units.
//!
//! # Pipeline
//!
//! ```text
//! MsisRequest
//!      │
//!      ▼
//! normalize: coerce scalars to arrays, broadcast drivers along time,
//!            expand Ap scalars into 7-slot history vectors
//!      │
//!      ▼
//! AtmosphereModel::calculate → RawOutput (rank 2 trace or rank 5 grid)
//!      │
//!      ▼
//! package: slice per catalog variable, attach dims/coords/units, squeeze
//!      │
//!      ▼
//! Dataset
//! ```
//!
//! The pipeline is strictly linear and stateless; each call is independent
//! and side-effect-free apart from the model invocation itself.
//!
//! # Example
//!
//! ```rust
//! use msis::testdata::StubModel;
//! use msis::{calculate, MsisRequest, TimeInput};
//!
//! let time = TimeInput::from_iso8601_many(&[
//!     "2024-01-15T00:00:00Z",
//!     "2024-01-15T01:00:00Z",
//! ]).unwrap();
//!
//! let request = MsisRequest::new(time, 45.0, -75.0, vec![100.0, 200.0, 300.0])
//!     .with_f107(150.0);
//!
//! let ds = calculate(&StubModel::default(), request).unwrap();
//! let temp = ds.get("TEMPERATURE").unwrap();
//! assert_eq!(temp.unit.symbol(), "K");
//! ```

pub mod error;
pub mod inputs;
pub mod model;
pub mod package;
pub mod testdata;
pub mod units;
pub mod variables;

// Re-export commonly used types at crate root
pub use atmos_dataset::{Coords, DataArray, Dataset, Dim, Unit};
pub use error::{ModelError, MsisError, Result};
pub use inputs::{
    parse_iso8601, CoordInput, DriverInput, ModelInputs, MsisRequest, TimeInput, AP_HISTORY_LEN,
};
pub use model::{AtmosphereModel, RawOutput};
pub use variables::{standard_catalog, STANDARD_VARIABLES};

/// Run the full adapter pipeline: normalize, invoke, package.
///
/// Model failures propagate unchanged; no validation of driver array
/// lengths happens on this side of the boundary.
pub fn calculate<M: AtmosphereModel>(model: &M, request: MsisRequest) -> Result<Dataset> {
    let inputs = request.normalize();

    tracing::debug!(
        nt = inputs.times.len(),
        nalt = inputs.alts.len(),
        nlat = inputs.lats.len(),
        nlon = inputs.lons.len(),
        flythrough = inputs.is_flythrough(),
        "invoking atmosphere model"
    );

    let raw = model.calculate(&inputs)?;
    let catalog = model.variables();
    package::package(raw, &catalog, &inputs)
}
