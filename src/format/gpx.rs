//! GPX output formatter

use crate::config::Config;
use crate::coord::polygon::approximate_circle;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::share::ShareableState;
use crate::units::format_distance;

/// GPX formatter - a waypoint per center and a closed track per boundary
pub struct GpxFormatter;

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoints and boundary tracks"
    }

    fn mime_type(&self) -> &str {
        "application/gpx+xml"
    }

    fn file_name(&self) -> &str {
        "radius-map.gpx"
    }

    fn format(&self, state: &ShareableState, _config: &Config) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="radius-map" xmlns="http://www.topografix.com/GPX/1/1">"#);
        gpx.push('\n');

        gpx.push_str("  <metadata>\n");
        gpx.push_str("    <name>Radius Map</name>\n");
        gpx.push_str("  </metadata>\n");

        // Center waypoints first, GPX wants wpt before trk
        for (index, circle) in state.circles.iter().enumerate() {
            let center = circle.center();
            gpx.push_str(&format!(
                r#"  <wpt lat="{:.6}" lon="{:.6}">"#,
                center.lat, center.lng
            ));
            gpx.push('\n');
            gpx.push_str(&format!("    <name>Center {}</name>\n", index + 1));
            gpx.push_str(&format!(
                "    <desc>Radius: {}</desc>\n",
                format_distance(circle.radius(), circle.unit())
            ));
            gpx.push_str("  </wpt>\n");
        }

        for (index, circle) in state.circles.iter().enumerate() {
            let ring = approximate_circle(circle.center(), circle.radius_meters())?;

            gpx.push_str("  <trk>\n");
            gpx.push_str(&format!("    <name>Radius {}</name>\n", index + 1));
            gpx.push_str("    <trkseg>\n");
            for point in &ring {
                gpx.push_str(&format!(
                    "      <trkpt lat=\"{}\" lon=\"{}\"/>\n",
                    point.lat, point.lng
                ));
            }
            gpx.push_str("    </trkseg>\n");
            gpx.push_str("  </trk>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{Circle, Color, Coordinates};
    use crate::units::DistanceUnit;

    fn create_test_state() -> ShareableState {
        let a = Circle::new(
            Coordinates::new(40.7128, -74.0060),
            10.0,
            DistanceUnit::Miles,
            Color::default(),
        )
        .unwrap();
        let b = Circle::new(
            Coordinates::new(51.5, -0.1),
            3.0,
            DistanceUnit::Kilometers,
            Color::default(),
        )
        .unwrap();
        ShareableState::new(vec![a, b])
    }

    #[test]
    fn test_gpx_format() {
        let formatter = GpxFormatter;
        let output = formatter
            .format(&create_test_state(), &Config::default())
            .unwrap();

        // Verify GPX structure
        assert!(output.contains(r#"<?xml version="1.0""#));
        assert!(output.contains(r#"<gpx version="1.1""#));
        assert_eq!(output.matches("<wpt").count(), 2);
        assert_eq!(output.matches("<trk>").count(), 2);
        assert_eq!(output.matches("<trkpt").count(), 722);
        assert!(output.contains(r#"<wpt lat="40.712800" lon="-74.006000">"#));
        assert!(output.contains("<desc>Radius: 10.0 mi</desc>"));
        assert!(output.contains("</gpx>"));
    }

    #[test]
    fn test_waypoints_precede_tracks() {
        let output = GpxFormatter
            .format(&create_test_state(), &Config::default())
            .unwrap();
        let last_wpt = output.rfind("<wpt").unwrap();
        let first_trk = output.find("<trk>").unwrap();
        assert!(last_wpt < first_trk);
    }

    #[test]
    fn test_gpx_formatter_info() {
        let formatter = GpxFormatter;
        assert_eq!(formatter.name(), "gpx");
        assert!(!formatter.description().is_empty());
    }
}
