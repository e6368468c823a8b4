//! URL output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::share::{generate_embed, generate_state, ShareableState};

/// URL formatter - outputs the shareable link for the state
pub struct UrlFormatter;

impl UrlFormatter {
    /// Map page link against `base_url`, or the configured page when `None`
    pub fn format_with_base(
        &self,
        state: &ShareableState,
        base_url: Option<&str>,
        config: &Config,
    ) -> String {
        generate_state(state, base_url.unwrap_or(&config.share.base_url))
    }

    /// Embeddable widget link against `base_url`, or the configured widget page
    pub fn format_embed(
        &self,
        state: &ShareableState,
        base_url: Option<&str>,
        config: &Config,
    ) -> String {
        generate_embed(state, base_url.unwrap_or(&config.share.embed_base_url))
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Shareable map link"
    }

    fn mime_type(&self) -> &str {
        "text/uri-list"
    }

    fn file_name(&self) -> &str {
        "radius-map.url.txt"
    }

    fn format(&self, state: &ShareableState, config: &Config) -> Result<String> {
        Ok(self.format_with_base(state, None, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{Circle, Color, Coordinates};
    use crate::units::DistanceUnit;

    fn create_test_state() -> ShareableState {
        let circle = Circle::new(
            Coordinates::new(40.7128, -74.006),
            10.0,
            DistanceUnit::Miles,
            Color::default(),
        )
        .unwrap();
        ShareableState::new(vec![circle])
    }

    #[test]
    fn test_url_format_default_base() {
        let config = Config::default();
        let output = UrlFormatter.format(&create_test_state(), &config).unwrap();

        assert!(output.starts_with(&config.share.base_url));
        assert!(output.ends_with("?lat=40.712800&lng=-74.006000&r=10mi&color=4285F4"));
    }

    #[test]
    fn test_url_format_with_base() {
        let output = UrlFormatter.format_with_base(
            &create_test_state(),
            Some("http://localhost/map"),
            &Config::default(),
        );
        assert!(output.starts_with("http://localhost/map?lat="));
    }

    #[test]
    fn test_url_format_embed() {
        let mut state = create_test_state();
        state.show_controls = false;
        let config = Config::default();

        let output = UrlFormatter.format_embed(&state, None, &config);
        assert!(output.starts_with(&config.share.embed_base_url));
        assert!(output.ends_with("&controls=false"));

        let custom = UrlFormatter.format_embed(&state, Some("/widget"), &config);
        assert!(custom.starts_with("/widget?lat=40.712800"), "{}", custom);
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter;
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
