//! Shareable map state and its URL query codec
//!
//! Two query forms carry circles:
//! - single circle: `lat=..&lng=..&r=10mi&color=4285F4`
//! - many circles: one `c=lat,lng,radius,color` per circle, in draw order
//!
//! Decoding is lenient. A malformed circle is dropped and the rest of the URL
//! still decodes. Encoding always emits one of the two canonical forms.

pub mod query;
pub mod radius;

pub use radius::RadiusToken;

use crate::constants::share::{DEFAULT_RADIUS, MAX_ZOOM, MIN_ZOOM};
use crate::coord::{Circle, Color, Coordinates};
use crate::error::{Error, Result};
use crate::units::DistanceUnit;
use query::{with_query, QueryBuilder, QueryParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Circles plus the display flags that travel with them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareableState {
    /// Circles in draw order; the first one is the primary circle
    pub circles: Vec<Circle>,

    /// Ask the map to geolocate the viewer on load
    #[serde(default)]
    pub locate_on_load: bool,

    /// Fixed zoom (1-19); `None` lets the map fit the circles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,

    #[serde(default = "default_true")]
    pub interactive: bool,

    #[serde(default = "default_true")]
    pub show_controls: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ShareableState {
    fn default() -> Self {
        Self {
            circles: Vec::new(),
            locate_on_load: false,
            zoom: None,
            interactive: true,
            show_controls: true,
        }
    }
}

impl ShareableState {
    /// Create a state holding `circles` with default flags
    pub fn new(circles: Vec<Circle>) -> Self {
        Self {
            circles,
            ..Self::default()
        }
    }

    /// The circle the map frames first
    pub fn primary(&self) -> Option<&Circle> {
        self.circles.first()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Which page the query belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The full map page (`locate` flag)
    General,
    /// The embeddable widget (`zoom`, `interactive`, `controls` flags)
    Embed,
}

/// Decode a general share link
pub fn parse(query: &str) -> ShareableState {
    decode(query, Variant::General)
}

/// Decode an embeddable widget link
pub fn parse_embed(query: &str) -> ShareableState {
    decode(query, Variant::Embed)
}

/// Decode a query string, bare or as part of a full URL
///
/// Never fails: anything that does not parse is left out of the result.
pub fn decode(query: &str, variant: Variant) -> ShareableState {
    let params = QueryParams::parse(query);

    let circles = if params.contains("c") {
        params
            .get_all("c")
            .filter_map(|raw| match decode_tuple(raw) {
                Ok(circle) => Some(circle),
                Err(e) => {
                    debug!("Skipping circle {:?}: {}", raw, e);
                    None
                }
            })
            .collect()
    } else {
        decode_single(&params).into_iter().collect()
    };

    let mut state = ShareableState::new(circles);

    match variant {
        Variant::General => {
            state.locate_on_load = params.get("locate") == Some("true");
        }
        Variant::Embed => {
            state.zoom = params
                .get("zoom")
                .and_then(|z| z.trim().parse::<u8>().ok())
                .filter(|z| (MIN_ZOOM..=MAX_ZOOM).contains(z));
            state.interactive = params.get("interactive") != Some("false");
            state.show_controls = params.get("controls") != Some("false");
        }
    }

    state
}

/// Parse a `lat,lng,radius[,color]` tuple strictly
///
/// Unlike URL decoding, an unreadable color is an error here.
pub fn parse_circle_tuple(raw: &str) -> Result<Circle> {
    let parts = TupleParts::split(raw)?;
    let color = match parts.color {
        Some(color) => Color::parse(color)?,
        None => Color::default(),
    };
    parts.into_circle(color)
}

/// Parse a tuple from a URL, falling back to the default color
fn decode_tuple(raw: &str) -> Result<Circle> {
    let parts = TupleParts::split(raw)?;
    let color = lenient_color(parts.color);
    parts.into_circle(color)
}

struct TupleParts<'a> {
    lat: f64,
    lng: f64,
    radius: RadiusToken,
    color: Option<&'a str>,
}

impl<'a> TupleParts<'a> {
    fn split(raw: &'a str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            return Err(Error::InvalidCircle(format!(
                "Expected lat,lng,radius[,color], got {:?}",
                raw
            )));
        }

        let lat = parse_degrees(parts[0])
            .ok_or_else(|| Error::InvalidCoordinates(format!("Invalid latitude: {}", parts[0])))?;
        let lng = parse_degrees(parts[1])
            .ok_or_else(|| Error::InvalidCoordinates(format!("Invalid longitude: {}", parts[1])))?;
        let radius = RadiusToken::parse(parts[2])
            .ok_or_else(|| Error::InvalidRadius(format!("Invalid radius: {}", parts[2])))?;
        let color = parts.get(3).copied().filter(|c| !c.is_empty());

        Ok(Self {
            lat,
            lng,
            radius,
            color,
        })
    }

    fn into_circle(self, color: Color) -> Result<Circle> {
        Circle::new(
            Coordinates::new(self.lat, self.lng),
            self.radius.value,
            self.radius.unit,
            color,
        )
    }
}

fn decode_single(params: &QueryParams) -> Option<Circle> {
    let lat = parse_degrees(params.get("lat")?)?;
    let lng = parse_degrees(params.get("lng")?)?;

    let radius = match params.get("r") {
        Some(raw) => RadiusToken::parse(raw)?,
        None => RadiusToken::new(DEFAULT_RADIUS, DistanceUnit::Miles),
    };
    let color = lenient_color(params.get("color").filter(|c| !c.is_empty()));

    match Circle::new(Coordinates::new(lat, lng), radius.value, radius.unit, color) {
        Ok(circle) => Some(circle),
        Err(e) => {
            debug!("Skipping single circle: {}", e);
            None
        }
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lenient_color(raw: Option<&str>) -> Color {
    match raw.map(Color::parse) {
        Some(Ok(color)) => color,
        Some(Err(e)) => {
            debug!("Using default color: {}", e);
            Color::default()
        }
        None => Color::default(),
    }
}

/// Encode circles into a share link on `base_url`
///
/// No circles returns `base_url` unchanged. One circle uses the
/// `lat/lng/r/color` form, more use repeated `c` tuples in order.
pub fn generate(circles: &[Circle], base_url: &str) -> String {
    match circles_query(circles) {
        Some(builder) => with_query(base_url, &builder.finish()),
        None => base_url.to_string(),
    }
}

/// Encode a general-page state, adding `locate=true` when requested
pub fn generate_state(state: &ShareableState, base_url: &str) -> String {
    let Some(mut builder) = circles_query(&state.circles) else {
        return base_url.to_string();
    };
    if state.locate_on_load {
        builder.append("locate", "true");
    }
    with_query(base_url, &builder.finish())
}

/// Encode an embeddable-widget state
///
/// Flags at their defaults are left out of the URL.
pub fn generate_embed(state: &ShareableState, base_url: &str) -> String {
    let Some(mut builder) = circles_query(&state.circles) else {
        return base_url.to_string();
    };
    if let Some(zoom) = state.zoom.filter(|z| (MIN_ZOOM..=MAX_ZOOM).contains(z)) {
        builder.append("zoom", &zoom.to_string());
    }
    if !state.interactive {
        builder.append("interactive", "false");
    }
    if !state.show_controls {
        builder.append("controls", "false");
    }
    with_query(base_url, &builder.finish())
}

fn circles_query(circles: &[Circle]) -> Option<QueryBuilder> {
    let mut builder = QueryBuilder::new();

    match circles {
        [] => return None,
        [circle] => {
            let center = circle.center();
            builder
                .append("lat", &format!("{:.6}", center.lat))
                .append("lng", &format!("{:.6}", center.lng))
                .append("r", &radius_token(circle).to_string())
                .append("color", &circle.color().hex());
        }
        many => {
            for circle in many {
                builder.append("c", &encode_tuple(circle));
            }
        }
    }

    Some(builder)
}

/// `lat,lng,radius,color` for one circle
pub fn encode_tuple(circle: &Circle) -> String {
    let center = circle.center();
    format!(
        "{:.6},{:.6},{},{}",
        center.lat,
        center.lng,
        radius_token(circle),
        circle.color().hex()
    )
}

fn radius_token(circle: &Circle) -> RadiusToken {
    RadiusToken::new(circle.radius(), circle.unit())
}
