//! KML export
//!
//! Every circle becomes two placemarks: the filled disc as a polygon and its
//! center as a point. Output is byte-for-byte deterministic for equal input.

use crate::config::Config;
use crate::constants::export::{FILL_ALPHA, KML_FILE_NAME, KML_MIME_TYPE, STROKE_ALPHA};
use crate::coord::polygon::approximate_circle;
use crate::coord::{Circle, Color, Coordinates};
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::share::ShareableState;
use crate::units::{from_meters, DistanceUnit};

/// What the encoder needs to know about one circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportCircle {
    pub center: Coordinates,
    pub radius_meters: f64,
    pub color: Color,
}

impl From<&Circle> for ExportCircle {
    fn from(circle: &Circle) -> Self {
        Self {
            center: circle.center(),
            radius_meters: circle.radius_meters(),
            color: circle.color(),
        }
    }
}

/// Encode circles as a KML document
///
/// # Errors
/// Fails if a circle has an invalid center or radius.
pub fn encode_kml(circles: &[ExportCircle]) -> Result<String> {
    let mut kml = String::new();

    kml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    kml.push('\n');
    kml.push_str(r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#);
    kml.push('\n');
    kml.push_str("  <Document>\n");
    kml.push_str("    <name>Radius Map</name>\n");

    for (index, circle) in circles.iter().enumerate() {
        let number = index + 1;
        let ring = approximate_circle(circle.center, circle.radius_meters)?;
        let description = describe(circle);
        let stroke = circle.color.kml(STROKE_ALPHA);
        let fill = circle.color.kml(FILL_ALPHA);

        // Disc
        kml.push_str("    <Placemark>\n");
        kml.push_str(&format!("      <name>Radius {}</name>\n", number));
        kml.push_str(&format!("      <description>{}</description>\n", description));
        kml.push_str("      <Style>\n");
        kml.push_str("        <LineStyle>\n");
        kml.push_str(&format!("          <color>{}</color>\n", stroke));
        kml.push_str("          <width>2</width>\n");
        kml.push_str("        </LineStyle>\n");
        kml.push_str("        <PolyStyle>\n");
        kml.push_str(&format!("          <color>{}</color>\n", fill));
        kml.push_str("        </PolyStyle>\n");
        kml.push_str("      </Style>\n");
        kml.push_str("      <Polygon>\n");
        kml.push_str("        <outerBoundaryIs>\n");
        kml.push_str("          <LinearRing>\n");
        kml.push_str("            <coordinates>\n");
        for point in &ring {
            kml.push_str(&format!("              {},{},0\n", point.lng, point.lat));
        }
        kml.push_str("            </coordinates>\n");
        kml.push_str("          </LinearRing>\n");
        kml.push_str("        </outerBoundaryIs>\n");
        kml.push_str("      </Polygon>\n");
        kml.push_str("    </Placemark>\n");

        // Center
        kml.push_str("    <Placemark>\n");
        kml.push_str(&format!("      <name>Center {}</name>\n", number));
        kml.push_str(&format!("      <description>{}</description>\n", description));
        kml.push_str("      <Style>\n");
        kml.push_str("        <IconStyle>\n");
        kml.push_str(&format!("          <color>{}</color>\n", stroke));
        kml.push_str("        </IconStyle>\n");
        kml.push_str("      </Style>\n");
        kml.push_str("      <Point>\n");
        kml.push_str(&format!(
            "        <coordinates>{},{},0</coordinates>\n",
            circle.center.lng, circle.center.lat
        ));
        kml.push_str("      </Point>\n");
        kml.push_str("    </Placemark>\n");
    }

    kml.push_str("  </Document>\n");
    kml.push_str("</kml>\n");
    Ok(kml)
}

fn describe(circle: &ExportCircle) -> String {
    format!(
        "Center: {:.6}, {:.6}. Radius: {:.2} mi ({:.2} km)",
        circle.center.lat,
        circle.center.lng,
        from_meters(circle.radius_meters, DistanceUnit::Miles),
        from_meters(circle.radius_meters, DistanceUnit::Kilometers),
    )
}

/// KML formatter - outputs a Google Earth document
pub struct KmlFormatter;

impl OutputFormatter for KmlFormatter {
    fn name(&self) -> &str {
        "kml"
    }

    fn description(&self) -> &str {
        "KML document (Google Earth)"
    }

    fn mime_type(&self) -> &str {
        KML_MIME_TYPE
    }

    fn file_name(&self) -> &str {
        KML_FILE_NAME
    }

    fn format(&self, state: &ShareableState, _config: &Config) -> Result<String> {
        let circles: Vec<ExportCircle> = state.circles.iter().map(ExportCircle::from).collect();
        encode_kml(&circles)
    }
}
