//! The standard NRLMSIS output variable catalog.

/// Variable names in the order the model lays them out along the leading
/// axis of its raw output. The packager relies on this order positionally;
/// it is part of the external model's contract, not ours to rearrange.
pub const STANDARD_VARIABLES: [&str; 11] = [
    "MASS_DENSITY",
    "N2",
    "O2",
    "O",
    "HE",
    "H",
    "AR",
    "N",
    "ANOMALOUS_O",
    "NO",
    "TEMPERATURE",
];

/// The standard catalog as owned strings, for model implementations.
pub fn standard_catalog() -> Vec<String> {
    STANDARD_VARIABLES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        assert_eq!(STANDARD_VARIABLES[0], "MASS_DENSITY");
        assert_eq!(STANDARD_VARIABLES[10], "TEMPERATURE");
        assert_eq!(standard_catalog().len(), 11);
    }
}
