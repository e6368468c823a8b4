//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, share};

/// Default distance unit for new circles
pub const DEFAULT_UNIT: &str = "miles";

/// Default circle radius, in the default unit
pub const DEFAULT_RADIUS: f64 = share::DEFAULT_RADIUS;

/// Default circle color
pub const DEFAULT_COLOR: &str = share::DEFAULT_COLOR;

/// Default export format
pub const DEFAULT_FORMAT: &str = "kml";

/// Base URL of the full map page
pub const DEFAULT_SHARE_BASE_URL: &str = "https://radius-map.app/";

/// Base URL of the embeddable widget
pub const DEFAULT_EMBED_BASE_URL: &str = "https://radius-map.app/embed";

/// Geocoding service base URL
pub const DEFAULT_GEOCODER_URL: &str = api::NOMINATIM_URL;

/// User-Agent sent to the geocoding service
pub const DEFAULT_USER_AGENT: &str = concat!("radius-map/", env!("CARGO_PKG_VERSION"));

/// Default number of search candidates
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Default gap between geocoding requests, in milliseconds
pub const DEFAULT_MIN_INTERVAL_MS: u64 = api::GEOCODE_MIN_INTERVAL_MS;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "radius-map";
