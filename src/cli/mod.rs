//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod decode;
pub mod export;
pub mod measure;
pub mod search;
pub mod serve;
pub mod share;

use crate::coord::Circle;
use crate::error::Result;
use crate::share::parse_circle_tuple;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Draw radius circles on a map, export them and share them as links
#[derive(Parser)]
#[command(name = "radius-map")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a shareable link for one or more circles
    Share(share::ShareArgs),

    /// Decode a shareable link back into circles
    Decode(decode::DecodeArgs),

    /// Export circles as KML, GPX, JSON, text or a link
    Export(export::ExportArgs),

    /// Great-circle distance between two points
    Distance(measure::DistanceArgs),

    /// Area of a circle with the given radius
    Area(measure::AreaArgs),

    /// Convert a distance between units
    Convert(measure::ConvertArgs),

    /// Search for a place by name
    Search(search::SearchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let serving = matches!(cli.command, Commands::Serve(_));
    init_tracing(if serving { "info" } else { "warn" });

    match cli.command {
        Commands::Share(args) => share::run(args),
        Commands::Decode(args) => decode::run(args),
        Commands::Export(args) => export::run(args),
        Commands::Distance(args) => measure::run_distance(args),
        Commands::Area(args) => measure::run_area(args),
        Commands::Convert(args) => measure::run_convert(args),
        Commands::Search(args) => search::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Serve(args) => serve::run(args).await,
    }
}

/// Initialize logging; RUST_LOG overrides `default_level`
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `lat,lng,radius[,color]` arguments, failing on the first bad one
pub(crate) fn parse_circle_args(tuples: &[String]) -> Result<Vec<Circle>> {
    tuples.iter().map(|raw| parse_circle_tuple(raw)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_circle_args() {
        let circles =
            parse_circle_args(&["40.7,-74,10mi".to_string(), "-33.9,151.2,5km,#f00".to_string()])
                .unwrap();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[1].color().hex(), "FF0000");
    }

    #[test]
    fn test_parse_circle_args_rejects_bad_tuple() {
        let result = parse_circle_args(&["40.7,-74,10mi".to_string(), "40.7,-74,0".to_string()]);
        assert!(matches!(result, Err(Error::InvalidRadius(_))));
    }

    #[test]
    fn test_negative_coordinates_parse_as_values() {
        let cli = Cli::try_parse_from(["radius-map", "share", "--circle", "-33.9,151.2,5km"]).unwrap();
        match cli.command {
            Commands::Share(args) => assert_eq!(args.circles, vec!["-33.9,151.2,5km"]),
            _ => panic!("expected share command"),
        }
    }
}
