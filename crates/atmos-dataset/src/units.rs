//! Unit-of-measurement metadata.

use serde::{Deserialize, Serialize};

/// A unit of measurement attached to a variable or coordinate axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Human-readable label.
    pub label: String,
    /// Symbol or abbreviation.
    pub symbol: String,
}

impl Unit {
    /// Create a unit with label and symbol.
    pub fn new(label: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            symbol: symbol.into(),
        }
    }

    /// Get the symbol string.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Common units

    pub fn kelvin() -> Self {
        Self::new("Kelvin", "K")
    }

    pub fn kilograms_per_cubic_meter() -> Self {
        Self::new("Kilograms per cubic meter", "kg/m^3")
    }

    pub fn per_cubic_meter() -> Self {
        Self::new("Number per cubic meter", "1/m^3")
    }

    pub fn kilometers() -> Self {
        Self::new("Kilometers", "km")
    }

    pub fn degrees() -> Self {
        Self::new("Degrees", "deg")
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_presets() {
        assert_eq!(Unit::kelvin().symbol(), "K");
        assert_eq!(Unit::kilograms_per_cubic_meter().symbol(), "kg/m^3");
        assert_eq!(Unit::per_cubic_meter().symbol(), "1/m^3");
        assert_eq!(Unit::kilometers().symbol(), "km");
        assert_eq!(Unit::degrees().symbol(), "deg");
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(format!("{}", Unit::kelvin()), "K");
    }
}
