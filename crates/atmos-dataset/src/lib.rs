//! Labeled, dimensioned datasets for atmospheric model output.
//!
//! This crate provides a small container type family for gridded and
//! trace-shaped atmospheric data: named dimensions, coordinate arrays for
//! the time/altitude/latitude/longitude axes, per-variable data arrays in
//! row-major order, and unit metadata attached to every variable.
//!
//! # Example
//!
//! ```rust
//! use atmos_dataset::{Coords, DataArray, Dataset, Dim, Unit};
//! use chrono::{TimeZone, Utc};
//!
//! let coords = Coords::new(
//!     vec![Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()],
//!     vec![400.0],
//!     vec![45.0],
//!     vec![-75.0],
//! );
//!
//! let temperature = DataArray::new(
//!     vec![Dim::Time],
//!     vec![1],
//!     vec![890.5],
//!     Unit::kelvin(),
//! ).unwrap();
//!
//! let mut ds = Dataset::new(coords);
//! ds.insert("TEMPERATURE", temperature);
//! ```

pub mod dataset;
pub mod dims;
pub mod error;
pub mod units;

// Re-export commonly used types at crate root
pub use dataset::{DataArray, Dataset};
pub use dims::{Coords, Dim};
pub use error::{DatasetError, DatasetResult};
pub use units::Unit;
