//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Nominatim's usage policy asks for an identifying User-Agent and at most
//! about one request per second, so every search waits on the shared
//! [`Throttle`] first.

use crate::config::GeocoderConfig;
use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation, Throttle};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    base_url: String,
    throttle: Arc<Throttle>,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimBackend {
    /// Create a backend for `base_url` sending `user_agent`
    pub fn new(base_url: &str, user_agent: &str, throttle: Arc<Throttle>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            throttle,
        })
    }

    pub fn from_config(config: &GeocoderConfig, throttle: Arc<Throttle>) -> Result<Self> {
        Self::new(&config.url, &config.user_agent, throttle)
    }

    /// The throttle this backend waits on
    pub fn throttle(&self) -> &Arc<Throttle> {
        &self.throttle
    }

    /// Build the search request URL
    pub fn search_url(&self, query: &str, limit: usize) -> String {
        format!(
            "{}/search?q={}&format=json&limit={}&addressdetails=1",
            self.base_url,
            urlencoding::encode(query),
            limit
        )
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Result<(f64, f64)> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geocoding(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| Error::Geocoding(format!("Invalid longitude: {}", lng)))?;
        Ok((lat, lng))
    }

    fn into_locations(results: Vec<NominatimResult>) -> Result<Vec<GeoLocation>> {
        results
            .into_iter()
            .map(|result| {
                let (lat, lng) = Self::parse_coords(&result.lat, &result.lon)?;
                Ok(GeoLocation {
                    lat,
                    lng,
                    display_name: result.display_name,
                })
            })
            .collect()
    }
}

impl GeoBackend for NominatimBackend {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<GeoLocation>> {
        let url = self.search_url(query, limit);

        self.throttle.acquire().await;
        debug!("Geocoding {:?}", query);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Nominatim request failed: {}", e);
            Error::Geocoding(format!("Nominatim request failed: {}", e))
        })?;

        if !response.status().is_success() {
            warn!("Nominatim returned status {}", response.status());
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        debug!("Nominatim returned {} candidates", results.len());
        Self::into_locations(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;

    fn backend(base_url: &str) -> NominatimBackend {
        NominatimBackend::new(base_url, "radius-map-tests", Arc::new(Throttle::default())).unwrap()
    }

    /// Serve a fake Nominatim on an ephemeral port and return its base URL
    async fn mock_nominatim(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_parse_coords() {
        let (lat, lng) = NominatimBackend::parse_coords("40.7128", "-74.0060").unwrap();
        assert!((lat - 40.7128).abs() < 0.0001);
        assert!((lng - (-74.0060)).abs() < 0.0001);
    }

    #[test]
    fn test_parse_coords_invalid() {
        assert!(NominatimBackend::parse_coords("invalid", "0").is_err());
        assert!(NominatimBackend::parse_coords("0", "invalid").is_err());
    }

    #[test]
    fn test_search_url() {
        let url = backend("https://nominatim.example.org/").search_url("Times Square, NYC", 5);
        assert_eq!(
            url,
            "https://nominatim.example.org/search?q=Times%20Square%2C%20NYC&format=json&limit=5&addressdetails=1"
        );
    }

    #[test]
    fn test_into_locations() {
        let results: Vec<NominatimResult> = serde_json::from_str(
            r#"[
                {"lat": "48.8566", "lon": "2.3522", "display_name": "Paris, France", "place_id": 1},
                {"lat": "33.6609", "lon": "-95.5555", "display_name": "Paris, Texas"}
            ]"#,
        )
        .unwrap();

        let locations = NominatimBackend::into_locations(results).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].display_name, "Paris, France");
        assert!((locations[1].lng - (-95.5555)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_search_against_mock() {
        let router = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("format").map(String::as_str), Some("json"));
                assert_eq!(params.get("addressdetails").map(String::as_str), Some("1"));
                if params.get("q").map(String::as_str) == Some("nowhere") {
                    return Json(serde_json::json!([]));
                }
                Json(serde_json::json!([
                    {"lat": "51.5074", "lon": "-0.1278", "display_name": "London"}
                ]))
            }),
        );
        let geocoder = backend(&mock_nominatim(router).await);

        let found = geocoder.search("london", 1).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].display_name, "London");

        let none = geocoder.search("nowhere", 1).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let router = Router::new().route(
            "/search",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
        );
        let geocoder = backend(&mock_nominatim(router).await);

        let result = geocoder.search("london", 1).await;
        assert!(matches!(result, Err(Error::Geocoding(_))));
    }

    #[tokio::test]
    async fn test_search_unreachable() {
        let result = backend("http://127.0.0.1:1").search("london", 1).await;
        assert!(matches!(result, Err(Error::Geocoding(_))));
    }
}
