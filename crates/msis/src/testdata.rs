//! Test model implementations with predictable output values.
//!
//! [`StubModel`] stands in for the real calculation engine in unit and
//! integration tests and in the examples. Its output encodes the input
//! indices and driver values, so tests can verify slicing, broadcasting,
//! and packaging without any physics.

use crate::error::ModelError;
use crate::inputs::ModelInputs;
use crate::model::{AtmosphereModel, RawOutput};
use crate::variables::standard_catalog;

/// A deterministic atmosphere model for tests.
///
/// Value at (variable i, time t, alt a, lat la, lon lo):
///
/// ```text
/// (i + 1) * 1e6 + t * 1e4 + a * 100 + la * 10 + lo
///     + f107[t] + f107a[t] + ap[t][0]        (absent drivers contribute 0)
/// ```
///
/// Flythrough output (all spatial inputs single points) collapses to rank
/// 2 with the spatial index terms at zero. Driver arrays whose length does
/// not match the time axis produce a model error, the same way the real
/// engine rejects them.
pub struct StubModel {
    catalog: Vec<String>,
}

impl StubModel {
    /// Stub with a custom variable catalog.
    pub fn with_catalog(catalog: Vec<String>) -> Self {
        Self { catalog }
    }

    fn driver_term(inputs: &ModelInputs, t: usize) -> Result<f64, ModelError> {
        let nt = inputs.times.len();
        let mut term = 0.0;

        if let Some(f107s) = &inputs.f107s {
            if f107s.len() != nt {
                return Err(format!(
                    "f107 length {} does not match {} time steps",
                    f107s.len(),
                    nt
                )
                .into());
            }
            term += f107s[t];
        }

        if let Some(f107as) = &inputs.f107as {
            if f107as.len() != nt {
                return Err(format!(
                    "f107a length {} does not match {} time steps",
                    f107as.len(),
                    nt
                )
                .into());
            }
            term += f107as[t];
        }

        if let Some(aps) = &inputs.aps {
            if aps.len() != nt {
                return Err(
                    format!("ap length {} does not match {} time steps", aps.len(), nt).into(),
                );
            }
            term += aps[t][0];
        }

        Ok(term)
    }
}

impl Default for StubModel {
    fn default() -> Self {
        Self {
            catalog: standard_catalog(),
        }
    }
}

impl AtmosphereModel for StubModel {
    fn variables(&self) -> Vec<String> {
        self.catalog.clone()
    }

    fn calculate(&self, inputs: &ModelInputs) -> Result<RawOutput, ModelError> {
        let nv = self.catalog.len();
        let nt = inputs.times.len();

        if inputs.is_flythrough() {
            let mut values = Vec::with_capacity(nv * nt);
            for i in 0..nv {
                for t in 0..nt {
                    values.push((i + 1) as f64 * 1e6 + t as f64 * 1e4 + Self::driver_term(inputs, t)?);
                }
            }
            return Ok(RawOutput::new(values, vec![nv, nt]));
        }

        let (nalt, nlat, nlon) = (inputs.alts.len(), inputs.lats.len(), inputs.lons.len());
        let mut values = Vec::with_capacity(nv * nt * nalt * nlat * nlon);
        for i in 0..nv {
            for t in 0..nt {
                let driver = Self::driver_term(inputs, t)?;
                for a in 0..nalt {
                    for la in 0..nlat {
                        for lo in 0..nlon {
                            values.push(
                                (i + 1) as f64 * 1e6
                                    + t as f64 * 1e4
                                    + a as f64 * 100.0
                                    + la as f64 * 10.0
                                    + lo as f64
                                    + driver,
                            );
                        }
                    }
                }
            }
        }
        Ok(RawOutput::new(values, vec![nv, nt, nalt, nlat, nlon]))
    }
}

/// A model that always fails, for error-propagation tests.
pub struct FailingModel;

impl AtmosphereModel for FailingModel {
    fn variables(&self) -> Vec<String> {
        standard_catalog()
    }

    fn calculate(&self, _inputs: &ModelInputs) -> Result<RawOutput, ModelError> {
        Err("synthetic model failure".into())
    }
}
