//! The fixed units table for catalog variables.

use atmos_dataset::Unit;

use crate::error::{MsisError, Result};

/// Look up the unit for a catalog variable by name.
///
/// Unknown names are a hard error: unit metadata is safety-relevant for
/// downstream physical interpretation, so a variable is never silently
/// emitted without one.
pub fn unit_for(name: &str) -> Result<Unit> {
    match name {
        "MASS_DENSITY" => Ok(Unit::kilograms_per_cubic_meter()),
        "N2" | "O2" | "O" | "HE" | "H" | "AR" | "N" | "ANOMALOUS_O" | "NO" => {
            Ok(Unit::per_cubic_meter())
        }
        "TEMPERATURE" => Ok(Unit::kelvin()),
        other => Err(MsisError::UnknownVariable(other.to_string())),
    }
}
