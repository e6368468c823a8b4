//! Human-readable text output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::share::ShareableState;
use crate::units::{format_area, format_distance, from_meters, DistanceUnit};

/// Text formatter - outputs a human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }

    fn file_name(&self) -> &str {
        "radius-map.txt"
    }

    fn format(&self, state: &ShareableState, _config: &Config) -> Result<String> {
        let mut output = String::new();

        let Some(primary) = state.primary() else {
            output.push_str("No radius defined\n");
            return Ok(output);
        };

        for (index, circle) in state.circles.iter().enumerate() {
            let center = circle.center();
            // The other metric/imperial unit, for a second reading
            let alt_unit = match circle.unit() {
                DistanceUnit::Miles | DistanceUnit::Feet => DistanceUnit::Kilometers,
                DistanceUnit::Kilometers | DistanceUnit::Meters => DistanceUnit::Miles,
            };

            output.push_str(&format!("Circle {}\n", index + 1));
            output.push_str(&format!(
                "  Center: ({:.6}, {:.6})\n",
                center.lat, center.lng
            ));
            output.push_str(&format!(
                "  Radius: {} ({})\n",
                format_distance(circle.radius(), circle.unit()),
                format_distance(from_meters(circle.radius_meters(), alt_unit), alt_unit)
            ));
            output.push_str(&format!(
                "  Area: {}\n",
                format_area(circle.area(), circle.unit())
            ));
            output.push_str(&format!("  Color: {}\n", circle.color()));
        }

        let mut footer = Vec::new();
        if state.circles.len() > 1 {
            let center = primary.center();
            footer.push(format!(
                "Framed on: Circle 1 ({:.6}, {:.6})",
                center.lat, center.lng
            ));
        }
        if state.locate_on_load {
            footer.push("Locate on load: yes".to_string());
        }
        if let Some(zoom) = state.zoom {
            footer.push(format!("Zoom: {}", zoom));
        }
        if !footer.is_empty() {
            output.push('\n');
            for line in footer {
                output.push_str(&line);
                output.push('\n');
            }
        }

        Ok(output)
    }
}
