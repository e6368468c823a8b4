//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/radius-map/config.toml

pub mod defaults;

use crate::coord::Color;
use crate::error::{Error, Result};
use crate::units::DistanceUnit;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default values for new circles and exports
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Share link settings
    #[serde(default)]
    pub share: ShareConfig,

    /// Geocoding service settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Default values for new circles and exports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Unit for radii given without one
    #[serde(default)]
    pub unit: DistanceUnit,

    /// Radius used when none is given
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Circle color used when none is given
    #[serde(default)]
    pub color: Color,

    /// Default export format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Share link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Base URL of the full map page
    #[serde(default = "default_share_base_url")]
    pub base_url: String,

    /// Base URL of the embeddable widget
    #[serde(default = "default_embed_base_url")]
    pub embed_base_url: String,
}

/// Geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Service base URL
    #[serde(default = "default_geocoder_url")]
    pub url: String,

    /// Identifying User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Number of candidates to request
    #[serde(default = "default_search_limit")]
    pub limit: usize,

    /// Minimum gap between requests; values below 1100 are raised to 1100
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Map page assets; unset means `./static` or `static` next to the binary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
}

// Default value functions for serde
fn default_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}
fn default_embed_base_url() -> String {
    DEFAULT_EMBED_BASE_URL.to_string()
}
fn default_geocoder_url() -> String {
    DEFAULT_GEOCODER_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}
fn default_min_interval_ms() -> u64 {
    DEFAULT_MIN_INTERVAL_MS
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            radius: default_radius(),
            color: Color::default(),
            format: default_format(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_share_base_url(),
            embed_base_url: default_embed_base_url(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: default_geocoder_url(),
            user_agent: default_user_agent(),
            limit: default_search_limit(),
            min_interval_ms: default_min_interval_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "unit"] => Some(self.defaults.unit.to_string()),
            ["defaults", "radius"] => Some(self.defaults.radius.to_string()),
            ["defaults", "color"] => Some(self.defaults.color.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["share", "base_url"] => Some(self.share.base_url.clone()),
            ["share", "embed_base_url"] => Some(self.share.embed_base_url.clone()),

            ["geocoder", "url"] => Some(self.geocoder.url.clone()),
            ["geocoder", "user_agent"] => Some(self.geocoder.user_agent.clone()),
            ["geocoder", "limit"] => Some(self.geocoder.limit.to_string()),
            ["geocoder", "min_interval_ms"] => Some(self.geocoder.min_interval_ms.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "static_dir"] => Some(
                self.server
                    .static_dir
                    .as_ref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_default(),
            ),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "unit"] => {
                self.defaults.unit = value.parse().map_err(Error::Config)?;
            }
            ["defaults", "radius"] => {
                let radius: f64 = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid radius value: {}", value)))?;
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(Error::Config(format!(
                        "Radius must be a positive number: {}",
                        value
                    )));
                }
                self.defaults.radius = radius;
            }
            ["defaults", "color"] => {
                self.defaults.color = Color::parse(value)?;
            }
            ["defaults", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown format: {}", value)));
                }
                self.defaults.format = value.to_lowercase();
            }

            ["share", "base_url"] => {
                self.share.base_url = value.to_string();
            }
            ["share", "embed_base_url"] => {
                self.share.embed_base_url = value.to_string();
            }

            ["geocoder", "url"] => {
                self.geocoder.url = value.to_string();
            }
            ["geocoder", "user_agent"] => {
                if value.trim().is_empty() {
                    return Err(Error::Config("User agent must not be empty".to_string()));
                }
                self.geocoder.user_agent = value.to_string();
            }
            ["geocoder", "limit"] => {
                self.geocoder.limit = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid limit value: {}", value)))?;
            }
            ["geocoder", "min_interval_ms"] => {
                let ms: u64 = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid interval value: {}", value)))?;
                self.geocoder.min_interval_ms = ms.max(DEFAULT_MIN_INTERVAL_MS);
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }
            ["server", "static_dir"] => {
                // Empty clears the override
                self.server.static_dir = match value.trim() {
                    "" => None,
                    dir => Some(PathBuf::from(dir)),
                };
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.unit",
            "defaults.radius",
            "defaults.color",
            "defaults.format",
            "share.base_url",
            "share.embed_base_url",
            "geocoder.url",
            "geocoder.user_agent",
            "geocoder.limit",
            "geocoder.min_interval_ms",
            "server.host",
            "server.port",
            "server.static_dir",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
