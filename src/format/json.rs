//! JSON output formatter

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::share::ShareableState;

/// JSON formatter - outputs the state as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Map state as JSON"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }

    fn file_name(&self) -> &str {
        "radius-map.json"
    }

    fn format(&self, state: &ShareableState, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(state)?)
    }
}
