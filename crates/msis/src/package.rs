//! Result packaging: raw model output into a labeled dataset.

use atmos_dataset::{Coords, DataArray, Dataset, DatasetError, Dim};

use crate::error::{MsisError, Result};
use crate::inputs::ModelInputs;
use crate::model::RawOutput;
use crate::units::unit_for;

/// Package a raw output array into a labeled, unit-annotated dataset.
///
/// Branches on the output rank: rank 5 is grid mode with per-variable dims
/// (time, alt, lat, lon); rank 2 is flythrough mode with a single time
/// dimension. In both modes all four coordinate arrays are attached. The
/// result is squeezed: length-1 axes leave the presented shape while their
/// coordinate values remain retrievable.
pub fn package(raw: RawOutput, catalog: &[String], inputs: &ModelInputs) -> Result<Dataset> {
    let dims: Vec<Dim> = match raw.ndim() {
        5 => vec![Dim::Time, Dim::Alt, Dim::Lat, Dim::Lon],
        2 => vec![Dim::Time],
        rank => return Err(MsisError::UnexpectedRank { rank }),
    };

    let nvars = raw.shape[0];
    if nvars != catalog.len() {
        return Err(MsisError::VariableCountMismatch {
            expected: catalog.len(),
            actual: nvars,
        });
    }

    let expected: usize = raw.shape.iter().product();
    if raw.values.len() != expected {
        return Err(DatasetError::ShapeMismatch {
            shape: raw.shape,
            expected,
            actual: raw.values.len(),
        }
        .into());
    }

    let var_shape: Vec<usize> = raw.shape[1..].to_vec();
    let stride: usize = var_shape.iter().product();

    let coords = Coords::new(
        inputs.times.clone(),
        inputs.alts.clone(),
        inputs.lats.clone(),
        inputs.lons.clone(),
    );

    let mut ds = Dataset::new(coords);
    for (i, name) in catalog.iter().enumerate() {
        let unit = unit_for(name)?;
        let slice = raw.values[i * stride..(i + 1) * stride].to_vec();
        let array = DataArray::new(dims.clone(), var_shape.clone(), slice, unit)?;
        ds.insert(name.clone(), array);
    }

    Ok(ds.squeeze())
}
