//! Output formatters
//!
//! Provides trait-based output formatting for a map state.

pub mod gpx;
pub mod json;
pub mod kml;
pub mod text;
pub mod url;

use crate::config::Config;
use crate::error::Result;
use crate::share::ShareableState;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// MIME type of the formatted document
    fn mime_type(&self) -> &str;

    /// File name offered when the document is saved or downloaded
    fn file_name(&self) -> &str;

    /// Format the map state
    ///
    /// # Arguments
    /// * `state` - Circles and flags to format
    /// * `config` - Application config (share base URL, etc.)
    fn format(&self, state: &ShareableState, config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "kml" => Some(Box::new(kml::KmlFormatter)),
        "gpx" => Some(Box::new(gpx::GpxFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    ["kml", "gpx", "json", "text", "url"]
        .into_iter()
        .filter_map(get_formatter)
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("kml").is_some());
        assert!(get_formatter("gpx").is_some());
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("url").is_some());
        assert!(get_formatter("shapefile").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("KML").is_some());
        assert!(get_formatter("Json").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 5);
        assert_eq!(formats[0].name, "kml");
        assert!(formats.iter().all(|f| !f.description.is_empty()));
    }

    #[test]
    fn test_names_match_registry() {
        for info in available_formats() {
            let formatter = get_formatter(&info.name).unwrap();
            assert_eq!(formatter.name(), info.name);
            assert!(!formatter.mime_type().is_empty());
            assert!(formatter.file_name().starts_with("radius-map"));
        }
    }
}
