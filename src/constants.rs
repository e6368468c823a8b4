//! Centralized constants for the radius-map crate
//!
//! Constants shared by more than one module live here so the geometry,
//! share codec and export code agree on the same numbers.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters, used for geometry
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Mean Earth radius in miles
    pub const EARTH_RADIUS_MILES: f64 = 3958.8;

    /// Feet per mile
    pub const FEET_PER_MILE: f64 = 5280.0;

    /// Number of one-degree bearing steps in an approximated circle ring
    pub const RING_STEPS: usize = 360;
}

/// Share URL constants
pub mod share {
    /// Default circle color (with marker)
    pub const DEFAULT_COLOR: &str = "#4285F4";

    /// Radius used when a single-circle URL carries no `r` parameter
    pub const DEFAULT_RADIUS: f64 = 10.0;

    /// Accepted zoom range for the embeddable map
    pub const MIN_ZOOM: u8 = 1;
    pub const MAX_ZOOM: u8 = 19;
}

/// Export document constants
pub mod export {
    /// File name offered for KML downloads
    pub const KML_FILE_NAME: &str = "radius-map.kml";

    /// MIME type of KML documents
    pub const KML_MIME_TYPE: &str = "application/vnd.google-earth.kml+xml";

    /// Stroke opacity (70%) as a KML alpha byte
    pub const STROKE_ALPHA: u8 = 0xb3;

    /// Fill opacity (15%) as a KML alpha byte
    pub const FILL_ALPHA: u8 = 0x26;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Minimum gap between two geocoding requests, in milliseconds
    pub const GEOCODE_MIN_INTERVAL_MS: u64 = 1100;
}
