//! Geocoding module
//!
//! Turns place names into coordinates through a rate-limited search service.

pub mod nominatim;
pub mod throttle;

pub use throttle::Throttle;

use crate::config::GeocoderConfig;
use crate::coord::Coordinates;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A geocoded location result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name (address or description)
    pub display_name: String,
}

impl GeoLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Search for places matching `query`
    ///
    /// An empty list means nothing matched; an `Err` means the search itself
    /// failed.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<GeoLocation>>> + Send;
}

/// Build the configured geocoder on a shared throttle
pub fn get_geocoder(
    config: &GeocoderConfig,
    throttle: Arc<Throttle>,
) -> Result<nominatim::NominatimBackend> {
    nominatim::NominatimBackend::from_config(config, throttle)
}
