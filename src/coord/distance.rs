//! Great-circle distance and circle area

use crate::constants::geo::{
    EARTH_RADIUS_KM, EARTH_RADIUS_METERS, EARTH_RADIUS_MILES, FEET_PER_MILE,
};
use crate::coord::Coordinates;
use crate::units::DistanceUnit;
use std::f64::consts::PI;

/// Calculate the distance between two points (Haversine formula)
///
/// The Earth radius is picked per unit. Feet are derived from the miles
/// result.
///
/// # Returns
/// Distance expressed in `unit`
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64, unit: DistanceUnit) -> f64 {
    let c = central_angle(lat1, lng1, lat2, lng2);

    match unit {
        DistanceUnit::Miles => EARTH_RADIUS_MILES * c,
        DistanceUnit::Kilometers => EARTH_RADIUS_KM * c,
        DistanceUnit::Meters => EARTH_RADIUS_METERS * c,
        DistanceUnit::Feet => EARTH_RADIUS_MILES * c * FEET_PER_MILE,
    }
}

/// Distance between two coordinates expressed in `unit`
pub fn distance_between(p1: Coordinates, p2: Coordinates, unit: DistanceUnit) -> f64 {
    haversine_distance(p1.lat, p1.lng, p2.lat, p2.lng, unit)
}

/// Angle subtended at the Earth's center, in radians
fn central_angle(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1 * PI / 180.0;
    let lat2_rad = lat2 * PI / 180.0;
    let delta_lat = (lat2 - lat1) * PI / 180.0;
    let delta_lng = (lng2 - lng1) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Area of a circle: π·r²
///
/// The result is in the square of whatever unit `radius` is already in.
/// `_unit` is not used for any conversion.
pub fn calculate_circle_area(radius: f64, _unit: DistanceUnit) -> f64 {
    PI * radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NYC: (f64, f64) = (40.7128, -74.0060);
    const LA: (f64, f64) = (34.0522, -118.2437);

    #[test]
    fn test_haversine_distance_nyc_la() {
        let miles = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Miles);
        // Roughly 2445 miles
        assert!((miles - 2445.0).abs() < 10.0, "NYC-LA: {}", miles);

        let km = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Kilometers);
        assert!((km - 3936.0).abs() < 15.0, "NYC-LA: {}", km);
    }

    #[test]
    fn test_one_degree_latitude() {
        let meters = haversine_distance(40.7128, -74.0060, 41.7128, -74.0060, DistanceUnit::Meters);
        assert!(
            (meters - 111_000.0).abs() < 1000.0,
            "Distance {} should be approximately 111000",
            meters
        );
    }

    #[test]
    fn test_zero_distance() {
        for unit in crate::units::available_units() {
            assert_eq!(haversine_distance(NYC.0, NYC.1, NYC.0, NYC.1, unit), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        for unit in crate::units::available_units() {
            let d1 = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, unit);
            let d2 = haversine_distance(LA.0, LA.1, NYC.0, NYC.1, unit);
            assert_relative_eq!(d1, d2, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_feet_derived_from_miles() {
        let miles = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Miles);
        let feet = haversine_distance(NYC.0, NYC.1, LA.0, LA.1, DistanceUnit::Feet);
        assert_relative_eq!(feet, miles * 5280.0, max_relative = 1e-12);
    }

    #[test]
    fn test_circle_area_ignores_unit() {
        let area_mi = calculate_circle_area(2.0, DistanceUnit::Miles);
        let area_m = calculate_circle_area(2.0, DistanceUnit::Meters);
        assert_relative_eq!(area_mi, 4.0 * PI);
        assert_eq!(area_mi, area_m);
    }
}
