//! Named dimensions and coordinate arrays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// A named dimension of an atmospheric dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dim {
    /// Observation/forecast time.
    Time,
    /// Altitude above the reference ellipsoid, kilometers.
    Alt,
    /// Geodetic latitude, degrees.
    Lat,
    /// Longitude, degrees.
    Lon,
}

impl Dim {
    /// Stable lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dim::Time => "time",
            Dim::Alt => "alt",
            Dim::Lat => "lat",
            Dim::Lon => "lon",
        }
    }
}

impl std::fmt::Display for Dim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinate values for the four dataset axes.
///
/// All four axes are always present, regardless of whether a given variable
/// actually varies along them. A squeezed-out axis keeps its (single)
/// coordinate value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    /// Timestamps along the time axis.
    pub time: Vec<DateTime<Utc>>,
    /// Altitudes in kilometers.
    pub alt: Vec<f64>,
    /// Latitudes in degrees.
    pub lat: Vec<f64>,
    /// Longitudes in degrees.
    pub lon: Vec<f64>,
}

impl Coords {
    /// Create a coordinate set from the four axis value arrays.
    pub fn new(
        time: Vec<DateTime<Utc>>,
        alt: Vec<f64>,
        lat: Vec<f64>,
        lon: Vec<f64>,
    ) -> Self {
        Self { time, alt, lat, lon }
    }

    /// Length of the given axis.
    pub fn len_of(&self, dim: Dim) -> usize {
        match dim {
            Dim::Time => self.time.len(),
            Dim::Alt => self.alt.len(),
            Dim::Lat => self.lat.len(),
            Dim::Lon => self.lon.len(),
        }
    }

    /// Unit metadata for a spatial axis. The time axis carries no unit.
    pub fn unit_of(&self, dim: Dim) -> Option<Unit> {
        match dim {
            Dim::Time => None,
            Dim::Alt => Some(Unit::kilometers()),
            Dim::Lat | Dim::Lon => Some(Unit::degrees()),
        }
    }
}
