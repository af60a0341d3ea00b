//! The dataset container: per-variable data arrays plus shared coordinates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dims::{Coords, Dim};
use crate::error::{DatasetError, DatasetResult};
use crate::units::Unit;

/// One variable's values with named dimensions and a unit.
///
/// Values are stored row-major in the order of `dims`. The constructor
/// enforces that `dims`, `shape`, and `values` are mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataArray {
    /// Dimension labels, one per axis, outermost first.
    pub dims: Vec<Dim>,
    /// Axis lengths matching `dims`.
    pub shape: Vec<usize>,
    /// Row-major values; length equals the product of `shape`.
    pub values: Vec<f64>,
    /// Unit of measurement for the values.
    pub unit: Unit,
}

impl DataArray {
    /// Create a data array, validating shape consistency.
    pub fn new(
        dims: Vec<Dim>,
        shape: Vec<usize>,
        values: Vec<f64>,
        unit: Unit,
    ) -> DatasetResult<Self> {
        if dims.len() != shape.len() {
            return Err(DatasetError::DimCountMismatch {
                dims: dims.len(),
                rank: shape.len(),
            });
        }

        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(DatasetError::ShapeMismatch {
                shape,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            dims,
            shape,
            values,
            unit,
        })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a multi-dimensional index.
    ///
    /// A rank-0 (fully squeezed) array is indexed with an empty slice.
    /// Returns `None` if the index rank or any component is out of range.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.shape.len() {
            return None;
        }

        let mut flat = 0usize;
        for (axis, (&i, &len)) in index.iter().zip(self.shape.iter()).enumerate() {
            if i >= len {
                return None;
            }
            let stride: usize = self.shape[axis + 1..].iter().product();
            flat += i * stride;
        }

        self.values.get(flat).copied()
    }

    /// Remove every length-1 axis from the presented shape.
    ///
    /// Values are untouched; only the `dims`/`shape` labeling changes. A
    /// single-value array squeezes to rank 0.
    pub fn squeeze(&mut self) {
        let keep: Vec<usize> = (0..self.shape.len())
            .filter(|&axis| self.shape[axis] > 1)
            .collect();

        self.dims = keep.iter().map(|&axis| self.dims[axis]).collect();
        self.shape = keep.iter().map(|&axis| self.shape[axis]).collect();
    }
}

/// A labeled dataset: shared coordinates plus named data variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Coordinate values for all four axes, present in every mode.
    pub coords: Coords,
    /// Data variables keyed by catalog name.
    pub variables: HashMap<String, DataArray>,
}

impl Dataset {
    /// Create an empty dataset over the given coordinates.
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            variables: HashMap::new(),
        }
    }

    /// Insert a data variable.
    pub fn insert(&mut self, name: impl Into<String>, array: DataArray) {
        self.variables.insert(name.into(), array);
    }

    /// Get a data variable by name.
    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.variables.get(name)
    }

    /// Number of data variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the dataset holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Names of all data variables.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(|s| s.as_str())
    }

    /// Squeeze every variable: length-1 axes leave the presented shape,
    /// while their coordinate values remain in `coords`.
    pub fn squeeze(mut self) -> Self {
        for array in self.variables.values_mut() {
            array.squeeze();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn test_coords() -> Coords {
        Coords::new(
            vec![
                Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 15, 1, 0, 0).unwrap(),
            ],
            vec![100.0, 200.0, 300.0],
            vec![45.0],
            vec![-75.0],
        )
    }

    #[test]
    fn test_data_array_shape_check() {
        let err = DataArray::new(
            vec![Dim::Time, Dim::Alt],
            vec![2, 3],
            vec![0.0; 5],
            Unit::kelvin(),
        );
        assert!(matches!(
            err,
            Err(DatasetError::ShapeMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_data_array_dim_count_check() {
        let err = DataArray::new(vec![Dim::Time], vec![2, 3], vec![0.0; 6], Unit::kelvin());
        assert!(matches!(
            err,
            Err(DatasetError::DimCountMismatch { dims: 1, rank: 2 })
        ));
    }

    #[test]
    fn test_data_array_get_row_major() {
        let values: Vec<f64> = (0..6).map(|v| v as f64).collect();
        let array =
            DataArray::new(vec![Dim::Time, Dim::Alt], vec![2, 3], values, Unit::kelvin()).unwrap();

        assert_eq!(array.get(&[0, 0]), Some(0.0));
        assert_eq!(array.get(&[0, 2]), Some(2.0));
        assert_eq!(array.get(&[1, 0]), Some(3.0));
        assert_eq!(array.get(&[1, 2]), Some(5.0));
        assert_eq!(array.get(&[2, 0]), None);
        assert_eq!(array.get(&[0]), None);
    }

    #[test]
    fn test_squeeze_drops_singleton_axes() {
        let mut array = DataArray::new(
            vec![Dim::Time, Dim::Alt, Dim::Lat, Dim::Lon],
            vec![2, 3, 1, 1],
            vec![0.0; 6],
            Unit::kelvin(),
        )
        .unwrap();

        array.squeeze();
        assert_eq!(array.dims, vec![Dim::Time, Dim::Alt]);
        assert_eq!(array.shape, vec![2, 3]);
        assert_eq!(array.len(), 6);
    }

    #[test]
    fn test_squeeze_to_scalar() {
        let mut array =
            DataArray::new(vec![Dim::Time], vec![1], vec![42.0], Unit::kelvin()).unwrap();

        array.squeeze();
        assert!(array.dims.is_empty());
        assert!(array.shape.is_empty());
        assert_eq!(array.get(&[]), Some(42.0));
    }

    #[test]
    fn test_dataset_squeeze_retains_coords() {
        let mut ds = Dataset::new(test_coords());
        ds.insert(
            "TEMPERATURE",
            DataArray::new(
                vec![Dim::Time, Dim::Alt, Dim::Lat, Dim::Lon],
                vec![2, 3, 1, 1],
                vec![0.0; 6],
                Unit::kelvin(),
            )
            .unwrap(),
        );

        let ds = ds.squeeze();
        let temp = ds.get("TEMPERATURE").unwrap();
        assert_eq!(temp.dims, vec![Dim::Time, Dim::Alt]);

        // The squeezed lat/lon axes keep their coordinate values.
        assert_eq!(ds.coords.lat, vec![45.0]);
        assert_eq!(ds.coords.lon, vec![-75.0]);
    }

    #[test]
    fn test_dataset_serialization_roundtrip() {
        let mut ds = Dataset::new(test_coords());
        ds.insert(
            "TEMPERATURE",
            DataArray::new(vec![Dim::Time], vec![2], vec![800.0, 810.0], Unit::kelvin()).unwrap(),
        );

        let json = serde_json::to_string(&ds).unwrap();
        assert!(json.contains("\"time\""));
        assert!(json.contains("\"TEMPERATURE\""));

        let parsed: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ds);
    }

    #[test]
    fn test_dataset_accessors() {
        let mut ds = Dataset::new(test_coords());
        assert!(ds.is_empty());

        ds.insert(
            "TEMPERATURE",
            DataArray::new(vec![Dim::Time], vec![2], vec![800.0, 810.0], Unit::kelvin()).unwrap(),
        );

        assert_eq!(ds.len(), 1);
        assert!(ds.get("TEMPERATURE").is_some());
        assert!(ds.get("N2").is_none());
        assert_eq!(ds.variable_names().collect::<Vec<_>>(), vec!["TEMPERATURE"]);
    }
}
