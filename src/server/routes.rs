//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::constants::share::{MAX_ZOOM, MIN_ZOOM};
use crate::coord::distance::haversine_distance;
use crate::coord::{Circle, Color, Coordinates};
use crate::error::Error;
use crate::format::url::UrlFormatter;
use crate::format::{available_formats, get_formatter, FormatInfo};
use crate::geo::{GeoBackend, GeoLocation};
use crate::server::state::AppState;
use crate::share::{decode, ShareableState, Variant};
use crate::units::{available_units, format_distance, DistanceUnit};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.static_dir().to_path_buf();

    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/formats", get(formats_handler))
        .route("/api/units", get(units_handler))
        .route("/api/share", post(share_handler))
        .route("/api/decode", post(decode_handler))
        .route("/api/export", post(export_handler))
        .route("/api/distance", get(distance_handler))
        .route("/api/search", get(search_handler))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }

    /// Pair the error with a status other than 400
    fn with_status(self, status: StatusCode) -> (StatusCode, Json<ApiError>) {
        (status, Json(self))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidRadius(_) => "INVALID_RADIUS",
            Error::InvalidColor(_) => "INVALID_COLOR",
            Error::InvalidUnit(_) => "INVALID_UNIT",
            Error::InvalidCircle(_) => "INVALID_CIRCLE",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Geocoding(_) => "SEARCH_FAILED",
            Error::NotFound(_) => "NOT_FOUND",
            _ => "INTERNAL_ERROR",
        };
        ApiError::new(code, err.to_string())
    }
}

/// A circle as sent by clients; validated into a [`Circle`]
#[derive(Debug, Deserialize)]
pub struct CircleRequest {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
    #[serde(default)]
    pub unit: DistanceUnit,
    pub color: Option<String>,
}

impl TryFrom<&CircleRequest> for Circle {
    type Error = Error;

    fn try_from(req: &CircleRequest) -> crate::error::Result<Self> {
        let color = match &req.color {
            Some(raw) => Color::parse(raw)?,
            None => Color::default(),
        };
        Circle::new(Coordinates::new(req.lat, req.lng), req.radius, req.unit, color)
    }
}

fn validate_circles(circles: &[CircleRequest]) -> Result<Vec<Circle>, ApiError> {
    circles
        .iter()
        .map(|c| Circle::try_from(c).map_err(ApiError::from))
        .collect()
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnitsResponse {
    pub units: Vec<UnitInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnitInfo {
    pub name: String,
    pub abbreviation: String,
    pub meters: f64,
}

/// List distance units
///
/// GET /api/units
async fn units_handler() -> Json<UnitsResponse> {
    let units = available_units()
        .into_iter()
        .map(|unit| UnitInfo {
            name: unit.to_string(),
            abbreviation: unit.abbreviation().to_string(),
            meters: unit.meters_factor(),
        })
        .collect();

    Json(UnitsResponse { units })
}

/// Share link request
#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub circles: Vec<CircleRequest>,
    /// Overrides the configured base URL
    pub base_url: Option<String>,
    #[serde(default)]
    pub locate: bool,
    /// Present for widget links
    pub embed: Option<EmbedOptions>,
}

/// Widget flags for an embed link
#[derive(Debug, Deserialize)]
pub struct EmbedOptions {
    pub zoom: Option<u8>,
    #[serde(default = "default_true")]
    pub interactive: bool,
    #[serde(default = "default_true")]
    pub controls: bool,
}

fn default_true() -> bool {
    true
}

/// Share link response
#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub url: String,
    /// The query part of `url`, without `?`
    pub query: String,
}

/// Create a share link
///
/// POST /api/share
async fn share_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ShareRequest>,
) -> Result<Json<ShareResponse>, ApiError> {
    let circles = validate_circles(&req.circles)?;
    let config = state.config.read().await;

    let url = match &req.embed {
        Some(embed) => {
            if let Some(zoom) = embed.zoom {
                if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
                    return Err(ApiError::new(
                        "INVALID_ZOOM",
                        format!("Zoom must be between {} and {}, got {}", MIN_ZOOM, MAX_ZOOM, zoom),
                    ));
                }
            }
            let share_state = ShareableState {
                circles,
                locate_on_load: false,
                zoom: embed.zoom,
                interactive: embed.interactive,
                show_controls: embed.controls,
            };
            UrlFormatter.format_embed(&share_state, req.base_url.as_deref(), &config)
        }
        None => {
            let share_state = ShareableState {
                locate_on_load: req.locate,
                ..ShareableState::new(circles)
            };
            UrlFormatter.format_with_base(&share_state, req.base_url.as_deref(), &config)
        }
    };

    let query = query_part(&url).to_string();
    Ok(Json(ShareResponse { url, query }))
}

fn query_part(url: &str) -> &str {
    match url.split_once('?') {
        Some((_, rest)) => rest.split_once('#').map_or(rest, |(query, _)| query),
        None => "",
    }
}

/// Decode request
#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    /// Full link or bare query
    pub url: String,
    #[serde(default)]
    pub embed: bool,
}

/// Decode a share link
///
/// POST /api/decode
async fn decode_handler(Json(req): Json<DecodeRequest>) -> Json<ShareableState> {
    let variant = if req.embed {
        Variant::Embed
    } else {
        Variant::General
    };
    Json(decode(&req.url, variant))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub circles: Vec<CircleRequest>,
}

/// Export circles as a downloadable document
///
/// POST /api/export?format=kml
async fn export_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
    Json(req): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let config = state.config.read().await;

    let format = query
        .format
        .unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| ApiError::new("UNKNOWN_FORMAT", format!("Unknown format: {}", format)))?;

    let circles = validate_circles(&req.circles)?;
    let body = formatter
        .format(&ShareableState::new(circles), &config)
        .map_err(ApiError::from)?;

    let headers = [
        (header::CONTENT_TYPE, formatter.mime_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", formatter.file_name()),
        ),
    ];
    Ok((headers, body).into_response())
}

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub lat1: f64,
    pub lng1: f64,
    pub lat2: f64,
    pub lng2: f64,
    pub unit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResponse {
    pub distance: f64,
    pub unit: DistanceUnit,
    pub formatted: String,
}

/// Great-circle distance between two points
///
/// GET /api/distance?lat1=..&lng1=..&lat2=..&lng2=..&unit=km
async fn distance_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DistanceQuery>,
) -> Result<Json<DistanceResponse>, ApiError> {
    Coordinates::new(query.lat1, query.lng1)
        .validate()
        .map_err(ApiError::from)?;
    Coordinates::new(query.lat2, query.lng2)
        .validate()
        .map_err(ApiError::from)?;

    let unit = match &query.unit {
        Some(raw) => raw
            .parse::<DistanceUnit>()
            .map_err(|e| ApiError::from(Error::InvalidUnit(e)))?,
        None => state.config.read().await.defaults.unit,
    };

    let distance = haversine_distance(query.lat1, query.lng1, query.lat2, query.lng2, unit);
    Ok(Json(DistanceResponse {
        distance,
        unit,
        formatted: format_distance(distance, unit),
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<GeoLocation>,
}

/// Place search through the throttled geocoder
///
/// GET /api/search?q=..&limit=..
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ApiError>)> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(ApiError::new("INVALID_QUERY", "Search query must not be empty")
            .with_status(StatusCode::BAD_REQUEST));
    }

    let limit = match query.limit {
        Some(limit) => limit.max(1),
        None => state.config.read().await.geocoder.limit,
    };

    let results = state.geocoder().search(q, limit).await.map_err(|e| {
        warn!("Search for {:?} failed: {}", q, e);
        ApiError::from(e).with_status(StatusCode::BAD_GATEWAY)
    })?;

    if results.is_empty() {
        return Err(ApiError::new("NOT_FOUND", format!("No results for '{}'", q))
            .with_status(StatusCode::NOT_FOUND));
    }

    Ok(Json(SearchResponse { results }))
}
