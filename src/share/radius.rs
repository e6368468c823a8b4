//! Radius tokens such as `10mi`, `2.5km` or `800`
//!
//! Both the general share link and the embeddable widget read radii with
//! this one parser.

use crate::units::DistanceUnit;
use once_cell::sync::Lazy;
use regex::Regex;

static RADIUS_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9.]+)(mi|km|m|ft)?$").expect("radius token pattern is valid")
});

/// A parsed radius: numeric value plus unit (miles when no suffix is given)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusToken {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl RadiusToken {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Parse a token, returning `None` when it is invalid
    ///
    /// Invalid means the token does not match `digits-and-dots` plus an
    /// optional `mi|km|m|ft` suffix, or the numeric part is not a finite
    /// number (`1.2.3`, `.`).
    pub fn parse(token: &str) -> Option<Self> {
        let caps = RADIUS_TOKEN.captures(token.trim())?;

        let value: f64 = caps.get(1)?.as_str().parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        let unit = match caps.get(2) {
            Some(suffix) => DistanceUnit::from_abbreviation(suffix.as_str())?,
            None => DistanceUnit::Miles,
        };

        Some(Self { value, unit })
    }
}

impl std::fmt::Display for RadiusToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit.abbreviation())
    }
}
