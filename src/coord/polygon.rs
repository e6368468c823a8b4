//! Circle-to-polygon approximation
//!
//! A circle on the sphere is approximated by walking the boundary in fixed
//! one-degree bearing steps. The resolution is not adaptive: very large radii
//! get visibly faceted edges.

use crate::constants::geo::{EARTH_RADIUS_METERS, RING_STEPS};
use crate::coord::Coordinates;
use crate::error::{Error, Result};

/// Point reached by travelling `distance_m` from `origin` along `bearing_deg`
///
/// Spherical direct geodesic:
/// - lat2 = asin(sin(lat1)·cos(δ) + cos(lat1)·sin(δ)·cos(θ))
/// - lng2 = lng1 + atan2(sin(θ)·sin(δ)·cos(lat1), cos(δ) − sin(lat1)·sin(lat2))
pub fn destination_point(origin: Coordinates, bearing_deg: f64, distance_m: f64) -> Coordinates {
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();
    let delta = distance_m / EARTH_RADIUS_METERS;
    let theta = bearing_deg.to_radians();

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let lat2 = (sin_lat1 * cos_delta + cos_lat1 * sin_delta * theta.cos()).asin();
    let lng2 = lng1
        + (theta.sin() * sin_delta * cos_lat1).atan2(cos_delta - sin_lat1 * lat2.sin());

    Coordinates::new(lat2.to_degrees(), lng2.to_degrees())
}

/// Approximate a circle as a closed ring of 361 points
///
/// Points run clockwise from due north (bearing 0°) in one-degree steps. The
/// last point is the first point repeated, so the ring closes exactly.
///
/// # Errors
/// Fails on an invalid center or a radius that is not a positive finite
/// number of meters.
pub fn approximate_circle(center: Coordinates, radius_meters: f64) -> Result<Vec<Coordinates>> {
    center.validate()?;
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return Err(Error::InvalidRadius(format!(
            "Radius must be a positive number of meters, got {}",
            radius_meters
        )));
    }

    let mut ring = Vec::with_capacity(RING_STEPS + 1);
    for step in 0..RING_STEPS {
        ring.push(destination_point(center, step as f64, radius_meters));
    }
    // Bearing 360° is bearing 0°
    ring.push(ring[0]);

    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::distance::distance_between;
    use crate::units::DistanceUnit;
    use approx::assert_relative_eq;

    fn nyc() -> Coordinates {
        Coordinates::new(40.7128, -74.0060)
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = approximate_circle(nyc(), 16_093.44).unwrap();
        assert_eq!(ring.len(), 361);
        assert_eq!(ring[0], ring[360]);
    }

    #[test]
    fn test_ring_points_on_radius() {
        let radius = 5_000.0;
        let ring = approximate_circle(nyc(), radius).unwrap();

        for point in &ring {
            let d = distance_between(nyc(), *point, DistanceUnit::Meters);
            assert_relative_eq!(d, radius, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_first_point_due_north() {
        let ring = approximate_circle(nyc(), 1_000.0).unwrap();
        assert!(ring[0].lat > nyc().lat);
        assert_relative_eq!(ring[0].lng, nyc().lng, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_point_due_east_on_equator() {
        let origin = Coordinates::new(0.0, 0.0);
        let east = destination_point(origin, 90.0, 111_195.0);
        assert!(east.lat.abs() < 1e-9);
        assert!((east.lng - 1.0).abs() < 1e-3, "lng {}", east.lng);
    }

    #[test]
    fn test_invalid_inputs_fail_fast() {
        assert!(matches!(
            approximate_circle(nyc(), 0.0),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            approximate_circle(nyc(), f64::NAN),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            approximate_circle(Coordinates::new(120.0, 0.0), 10.0),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = approximate_circle(nyc(), 2_500.0).unwrap();
        let b = approximate_circle(nyc(), 2_500.0).unwrap();
        assert_eq!(a, b);
    }
}
