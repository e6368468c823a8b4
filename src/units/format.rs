//! Human-readable distance and area strings

use crate::units::DistanceUnit;

/// Format a distance with its unit label
///
/// Miles and kilometers below 0.1 get 3 decimals, anything below 10 gets 2,
/// everything else gets 1.
pub fn format_distance(value: f64, unit: DistanceUnit) -> String {
    let decimals = if is_large_unit(unit) && value < 0.1 {
        3
    } else if value < 10.0 {
        2
    } else {
        1
    };
    format!("{:.*} {}", decimals, value, unit.abbreviation())
}

/// Format an area with its squared-unit label
///
/// Same small-value rules as distances, then 2 decimals up to 100 and a
/// thousands-grouped integer beyond that.
pub fn format_area(value: f64, unit: DistanceUnit) -> String {
    let number = if is_large_unit(unit) && value < 0.1 {
        format!("{:.3}", value)
    } else if value < 100.0 {
        format!("{:.2}", value)
    } else {
        group_thousands(value)
    };
    format!("{} {}", number, unit.area_label())
}

fn is_large_unit(unit: DistanceUnit) -> bool {
    matches!(unit, DistanceUnit::Miles | DistanceUnit::Kilometers)
}

/// Round to an integer and insert `,` every three digits
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs().round());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}
