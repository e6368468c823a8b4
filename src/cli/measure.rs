//! Distance, area and unit conversion commands

use crate::config::Config;
use crate::coord::distance::{calculate_circle_area, distance_between};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::units::{convert, format_area, format_distance, DistanceUnit};
use clap::Args;

/// Distance command arguments
#[derive(Args)]
pub struct DistanceArgs {
    /// Start point as lat,lng
    #[arg(long, allow_hyphen_values = true)]
    pub from: Coordinates,

    /// End point as lat,lng
    #[arg(long, allow_hyphen_values = true)]
    pub to: Coordinates,

    /// Unit (defaults to the configured unit)
    #[arg(long, short = 'u')]
    pub unit: Option<DistanceUnit>,
}

/// Area command arguments
#[derive(Args)]
pub struct AreaArgs {
    /// Circle radius
    #[arg(long, short = 'r')]
    pub radius: f64,

    /// Unit of the radius (defaults to the configured unit)
    #[arg(long, short = 'u')]
    pub unit: Option<DistanceUnit>,
}

/// Convert command arguments
#[derive(Args)]
pub struct ConvertArgs {
    /// Distance to convert
    pub value: f64,

    /// Unit of `value`
    #[arg(long)]
    pub from: DistanceUnit,

    /// Target unit
    #[arg(long)]
    pub to: DistanceUnit,
}

/// Run the distance command
pub fn run_distance(args: DistanceArgs) -> Result<()> {
    let unit = args.unit.unwrap_or(Config::load()?.defaults.unit);
    let distance = distance_between(args.from, args.to, unit);
    println!("{}", format_distance(distance, unit));
    Ok(())
}

/// Run the area command
pub fn run_area(args: AreaArgs) -> Result<()> {
    let unit = args.unit.unwrap_or(Config::load()?.defaults.unit);
    println!("{}", area_text(args.radius, unit)?);
    Ok(())
}

/// Run the convert command
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    println!("{}", convert_text(args.value, args.from, args.to));
    Ok(())
}

fn area_text(radius: f64, unit: DistanceUnit) -> Result<String> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidRadius(format!(
            "Radius must be a positive number, got {}",
            radius
        )));
    }
    Ok(format_area(calculate_circle_area(radius, unit), unit))
}

fn convert_text(value: f64, from: DistanceUnit, to: DistanceUnit) -> String {
    format!(
        "{} = {}",
        format_distance(value, from),
        format_distance(convert(value, from, to), to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_area_text() {
        assert_eq!(area_text(10.0, DistanceUnit::Miles).unwrap(), "314 sq mi");
        assert_eq!(area_text(1.0, DistanceUnit::Kilometers).unwrap(), "3.14 sq km");
        assert!(area_text(0.0, DistanceUnit::Miles).is_err());
    }

    #[test]
    fn test_convert_text() {
        assert_eq!(
            convert_text(10.0, DistanceUnit::Miles, DistanceUnit::Kilometers),
            "10.0 mi = 16.1 km"
        );
    }

    #[test]
    fn test_distance_args_parse() {
        let cli = Cli::try_parse_from([
            "radius-map",
            "distance",
            "--from",
            "40.7128,-74.0060",
            "--to",
            "-33.8688,151.2093",
            "--unit",
            "km",
        ])
        .unwrap();
        match cli.command {
            Commands::Distance(args) => {
                assert_eq!(args.to, Coordinates::new(-33.8688, 151.2093));
                assert_eq!(args.unit, Some(DistanceUnit::Kilometers));
            }
            _ => panic!("expected distance command"),
        }
    }

    #[test]
    fn test_distance_rejects_bad_point() {
        assert!(Cli::try_parse_from(["radius-map", "distance", "--from", "95,0", "--to", "0,0"]).is_err());
    }
}
