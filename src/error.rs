//! Error types for radius-map

use thiserror::Error;

/// Main error type for radius-map operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid circle: {0}")]
    InvalidCircle(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Not found: '{0}'")]
    NotFound(String),
}

/// Result type alias for radius-map operations
pub type Result<T> = std::result::Result<T, Error>;
