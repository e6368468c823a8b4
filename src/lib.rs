//! radius-map: circles on a map, as documents and as links
//!
//! A library and CLI tool for drawing radius circles around points on the
//! Earth and moving them between tools.
//!
//! ## Features
//!
//! - Distance units, haversine distance and circle area
//! - Geodesic circle-to-polygon approximation (361-point closed ring)
//! - KML, GPX, JSON and text export
//! - Shareable map links for one or many circles, plus embeddable widget links
//! - Rate-limited place search (Nominatim)
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use radius_map::coord::{Circle, Color, Coordinates};
//! use radius_map::format::kml::{encode_kml, ExportCircle};
//! use radius_map::share;
//! use radius_map::units::DistanceUnit;
//!
//! let nyc = Circle::new(
//!     Coordinates::new(40.7128, -74.0060),
//!     10.0,
//!     DistanceUnit::Miles,
//!     Color::default(),
//! )
//! .unwrap();
//!
//! // Encode a link and read it back
//! let url = share::generate(&[nyc], "https://example.com/map");
//! assert!(url.contains("lat=40.712800&lng=-74.006000&r=10mi&color=4285F4"));
//! assert_eq!(share::parse(&url).circles.len(), 1);
//!
//! // Export as KML
//! let kml = encode_kml(&[ExportCircle::from(&nyc)]).unwrap();
//! assert!(kml.contains("<name>Radius 1</name>"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;
pub mod share;
pub mod units;

// Re-export commonly used types
pub use config::Config;
pub use coord::{Circle, Color, Coordinates};
pub use error::{Error, Result};
pub use share::ShareableState;
pub use units::DistanceUnit;
