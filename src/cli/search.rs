//! Search command handler
//!
//! Looks up places through the throttled geocoder.

use crate::config::Config;
use crate::coord::Circle;
use crate::error::{Error, Result};
use crate::geo::{get_geocoder, GeoBackend, GeoLocation, Throttle};
use crate::share::generate;
use clap::Args;
use std::sync::Arc;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Place name or address
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of candidates (defaults to the configured limit)
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Also print a share link centered on the best match
    #[arg(long)]
    pub share: bool,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let query = args.query.join(" ");
    let limit = args.limit.unwrap_or(config.geocoder.limit).max(1);

    let throttle = Arc::new(Throttle::from_millis(config.geocoder.min_interval_ms));
    let geocoder = get_geocoder(&config.geocoder, throttle)?;

    let locations = lookup(&geocoder, &query, limit).await?;

    for (index, location) in locations.iter().enumerate() {
        println!("{}", candidate_line(index, location));
    }

    if args.share {
        let best = &locations[0];
        let circle = Circle::new(
            best.coordinates(),
            config.defaults.radius,
            config.defaults.unit,
            config.defaults.color,
        )?;
        println!();
        println!("{}", generate(&[circle], &config.share.base_url));
    }

    Ok(())
}

/// Search, treating an empty result as [`Error::NotFound`]
async fn lookup(
    geocoder: &impl GeoBackend,
    query: &str,
    limit: usize,
) -> Result<Vec<GeoLocation>> {
    let locations = geocoder.search(query, limit).await?;
    if locations.is_empty() {
        return Err(Error::NotFound(query.to_string()));
    }
    Ok(locations)
}

fn candidate_line(index: usize, location: &GeoLocation) -> String {
    format!(
        "{:>2}. {} ({:.6}, {:.6})",
        index + 1,
        location.display_name,
        location.lat,
        location.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Answers every query with a fixed outcome
    struct FixedBackend(Option<Vec<GeoLocation>>);

    impl GeoBackend for FixedBackend {
        async fn search(&self, _query: &str, limit: usize) -> Result<Vec<GeoLocation>> {
            match &self.0 {
                Some(locations) => Ok(locations.iter().take(limit).cloned().collect()),
                None => Err(Error::Geocoding("Nominatim returned HTTP 503".to_string())),
            }
        }
    }

    fn paris() -> GeoLocation {
        GeoLocation {
            lat: 48.8566,
            lng: 2.3522,
            display_name: "Paris, France".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_returns_matches() {
        let backend = FixedBackend(Some(vec![paris(), paris()]));
        let locations = lookup(&backend, "paris", 1).await.unwrap();
        assert_eq!(locations.len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_empty_is_not_found() {
        let result = lookup(&FixedBackend(Some(Vec::new())), "atlantis", 5).await;
        match result {
            Err(e @ Error::NotFound(_)) => assert_eq!(e.to_string(), "Not found: 'atlantis'"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_is_geocoding_error() {
        let result = lookup(&FixedBackend(None), "paris", 5).await;
        assert!(matches!(result, Err(Error::Geocoding(_))));
    }

    #[test]
    fn test_candidate_line() {
        let location = GeoLocation {
            lat: 48.8566,
            lng: 2.3522,
            display_name: "Paris, France".to_string(),
        };
        assert_eq!(
            candidate_line(0, &location),
            " 1. Paris, France (48.856600, 2.352200)"
        );
    }
}
