//! Coordinates, circles and the geometry around them
//!
//! This module handles:
//! - Validated coordinates and immutable circle values
//! - Great-circle distance and circle area
//! - Approximating a circle as a closed polygon ring

pub mod color;
pub mod distance;
pub mod polygon;

pub use color::Color;

use crate::error::{Error, Result};
use crate::units::{to_meters, DistanceUnit};
use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are finite and within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(Error::InvalidCoordinates(format!(
                "({}, {}) is not a finite position",
                self.lat, self.lng
            )));
        }
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for Coordinates {
    type Err = Error;

    /// Parse `"lat,lng"`
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| Error::InvalidCoordinates(format!("Expected lat,lng: {}", s)))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCoordinates(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCoordinates(format!("Invalid longitude: {}", lng)))?;

        let coords = Self::new(lat, lng);
        coords.validate()?;
        Ok(coords)
    }
}

/// A radius drawn around a center point
///
/// Circles are immutable. The `with_*` methods return a new circle and
/// re-run validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields", into = "CircleFields")]
pub struct Circle {
    center: Coordinates,
    radius: f64,
    unit: DistanceUnit,
    color: Color,
}

impl Circle {
    /// Create a circle, rejecting invalid centers and non-positive radii
    pub fn new(center: Coordinates, radius: f64, unit: DistanceUnit, color: Color) -> Result<Self> {
        center.validate()?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidRadius(format!(
                "Radius must be a positive number, got {}",
                radius
            )));
        }

        Ok(Self {
            center,
            radius,
            unit,
            color,
        })
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    /// Radius expressed in `unit()`
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Radius in meters
    pub fn radius_meters(&self) -> f64 {
        to_meters(self.radius, self.unit)
    }

    /// Area in the square of `unit()`
    pub fn area(&self) -> f64 {
        distance::calculate_circle_area(self.radius, self.unit)
    }
}

/// Flat serialized form of a circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CircleFields {
    lat: f64,
    lng: f64,
    radius: f64,
    #[serde(default)]
    unit: DistanceUnit,
    #[serde(default)]
    color: Color,
}

impl TryFrom<CircleFields> for Circle {
    type Error = Error;

    fn try_from(fields: CircleFields) -> Result<Self> {
        Circle::new(
            Coordinates::new(fields.lat, fields.lng),
            fields.radius,
            fields.unit,
            fields.color,
        )
    }
}

impl From<Circle> for CircleFields {
    fn from(circle: Circle) -> Self {
        Self {
            lat: circle.center.lat,
            lng: circle.center.lng,
            radius: circle.radius,
            unit: circle.unit,
            color: circle.color,
        }
    }
}
