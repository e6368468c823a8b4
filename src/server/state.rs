//! Server shared state
//!
//! Holds configuration and shared resources for the HTTP server.

use crate::config::Config;
use crate::error::Result;
use crate::geo::nominatim::NominatimBackend;
use crate::geo::{get_geocoder, Throttle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,

    /// Geocoder; every request handler shares its throttle
    geocoder: NominatimBackend,

    /// Directory the map page is served from
    static_dir: PathBuf,
}

impl AppState {
    /// Create new application state with its own geocoding throttle
    pub fn new(config: Config) -> Result<Self> {
        let throttle = Arc::new(Throttle::from_millis(config.geocoder.min_interval_ms));
        Self::with_throttle(config, throttle)
    }

    /// Create application state on an existing throttle
    pub fn with_throttle(config: Config, throttle: Arc<Throttle>) -> Result<Self> {
        let geocoder = get_geocoder(&config.geocoder, throttle)?;
        let static_dir = resolve_static_dir(config.server.static_dir.as_deref());
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            geocoder,
            static_dir,
        })
    }

    pub fn geocoder(&self) -> &NominatimBackend {
        &self.geocoder
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

/// The configured directory, else `./static`, else `static` next to the executable
fn resolve_static_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    let local = PathBuf::from("static");
    if local.exists() {
        return local;
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("static")))
        .filter(|path| path.exists())
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_shares_throttle() {
        let throttle = Arc::new(Throttle::default());
        let state = AppState::with_throttle(Config::default(), Arc::clone(&throttle)).unwrap();
        assert!(Arc::ptr_eq(state.geocoder().throttle(), &throttle));
    }

    #[test]
    fn test_configured_static_dir_wins() {
        let mut config = Config::default();
        config.server.static_dir = Some(PathBuf::from("/srv/map-page"));
        let state = AppState::new(config).unwrap();
        assert_eq!(state.static_dir(), Path::new("/srv/map-page"));
    }
}
