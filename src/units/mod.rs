//! Distance units and linear conversions
//!
//! Meters are the canonical unit for every geometry operation. The other
//! units exist for input and display only.

pub mod format;

pub use format::{format_area, format_distance};

use serde::{Deserialize, Serialize};

/// Meters in one mile
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters in one kilometer
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Meters in one foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// A distance unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
    Meters,
    Feet,
}

impl Default for DistanceUnit {
    fn default() -> Self {
        Self::Miles
    }
}

impl DistanceUnit {
    /// How many meters one of this unit is worth
    pub fn meters_factor(self) -> f64 {
        match self {
            Self::Miles => METERS_PER_MILE,
            Self::Kilometers => METERS_PER_KILOMETER,
            Self::Meters => 1.0,
            Self::Feet => METERS_PER_FOOT,
        }
    }

    /// Short suffix used in share URLs and distance labels
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Miles => "mi",
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::Feet => "ft",
        }
    }

    /// Label used for areas expressed in the square of this unit
    pub fn area_label(self) -> &'static str {
        match self {
            Self::Miles => "sq mi",
            Self::Kilometers => "sq km",
            Self::Meters => "sq m",
            Self::Feet => "sq ft",
        }
    }

    /// Parse a share-URL suffix (`mi`, `km`, `m`, `ft`), case-insensitive
    pub fn from_abbreviation(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "mi" => Some(Self::Miles),
            "km" => Some(Self::Kilometers),
            "m" => Some(Self::Meters),
            "ft" => Some(Self::Feet),
            _ => None,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Miles => write!(f, "miles"),
            Self::Kilometers => write!(f, "kilometers"),
            Self::Meters => write!(f, "meters"),
            Self::Feet => write!(f, "feet"),
        }
    }
}

impl std::str::FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(Self::Miles),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(Self::Kilometers)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meters),
            "ft" | "foot" | "feet" => Ok(Self::Feet),
            _ => Err(format!("Unknown distance unit: {}", s)),
        }
    }
}

/// List all distance units
pub fn available_units() -> Vec<DistanceUnit> {
    vec![
        DistanceUnit::Miles,
        DistanceUnit::Kilometers,
        DistanceUnit::Meters,
        DistanceUnit::Feet,
    ]
}

/// Convert a value expressed in `unit` to meters
pub fn to_meters(value: f64, unit: DistanceUnit) -> f64 {
    value * unit.meters_factor()
}

/// Convert meters to a value expressed in `unit`
///
/// Divides by the same factor `to_meters` multiplies by, so the two are
/// inverses to floating-point precision.
pub fn from_meters(meters: f64, unit: DistanceUnit) -> f64 {
    meters / unit.meters_factor()
}

/// Convert a value between two units
pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return value;
    }
    from_meters(to_meters(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn test_to_meters() {
        assert_eq!(to_meters(1.0, DistanceUnit::Miles), 1609.344);
        assert_eq!(to_meters(2.0, DistanceUnit::Kilometers), 2000.0);
        assert_eq!(to_meters(5.0, DistanceUnit::Meters), 5.0);
        assert_eq!(to_meters(10.0, DistanceUnit::Feet), 3.048);
    }

    #[test]
    fn test_from_meters() {
        assert_eq!(from_meters(1609.344, DistanceUnit::Miles), 1.0);
        assert_eq!(from_meters(2500.0, DistanceUnit::Kilometers), 2.5);
        assert_relative_eq!(from_meters(1.0, DistanceUnit::Feet), 3.280_839_895, epsilon = 1e-9);
    }

    #[test]
    fn test_convert() {
        assert_relative_eq!(
            convert(10.0, DistanceUnit::Miles, DistanceUnit::Kilometers),
            16.09344,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            convert(1.0, DistanceUnit::Miles, DistanceUnit::Feet),
            5280.0,
            epsilon = 1e-9
        );
        assert_eq!(convert(7.5, DistanceUnit::Feet, DistanceUnit::Feet), 7.5);
    }

    #[test]
    fn test_abbreviation_roundtrip() {
        for unit in available_units() {
            assert_eq!(DistanceUnit::from_abbreviation(unit.abbreviation()), Some(unit));
        }
        assert_eq!(DistanceUnit::from_abbreviation("KM"), Some(DistanceUnit::Kilometers));
        assert_eq!(DistanceUnit::from_abbreviation("yd"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(DistanceUnit::from_str("Miles").unwrap(), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::from_str("km").unwrap(), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::from_str("metres").unwrap(), DistanceUnit::Meters);
        assert_eq!(DistanceUnit::from_str("foot").unwrap(), DistanceUnit::Feet);
        assert!(DistanceUnit::from_str("furlongs").is_err());
    }

    #[test]
    fn test_default_is_miles() {
        assert_eq!(DistanceUnit::default(), DistanceUnit::Miles);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DistanceUnit::Kilometers).unwrap();
        assert_eq!(json, "\"kilometers\"");
        let unit: DistanceUnit = serde_json::from_str("\"feet\"").unwrap();
        assert_eq!(unit, DistanceUnit::Feet);
    }

    proptest! {
        #[test]
        fn prop_unit_roundtrip(x in 1e-6f64..1e9, idx in 0usize..4) {
            let unit = available_units()[idx];
            let back = from_meters(to_meters(x, unit), unit);
            prop_assert!(((back - x) / x).abs() < 1e-9);
        }
    }
}
