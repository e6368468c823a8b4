//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "defaults.unit")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    // Show path
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            show_all_config(&config);
        }

        // Key only: show that value
        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| {
                Error::Config(format!(
                    "Unknown config key: {} (available: {})",
                    key,
                    Config::available_keys().join(", ")
                ))
            })?;
            println!("{}", value);
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            // Print the stored value, which may be normalized
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }

        // Value without key: not valid
        (None, Some(_)) => {
            return Err(Error::Config(
                "Must specify a key to set a value".to_string(),
            ));
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[defaults]");
    println!("unit = \"{}\"", config.defaults.unit);
    println!("radius = {}", config.defaults.radius);
    println!("color = \"{}\"", config.defaults.color);
    println!("format = \"{}\"", config.defaults.format);
    println!();

    println!("[share]");
    println!("base_url = \"{}\"", config.share.base_url);
    println!("embed_base_url = \"{}\"", config.share.embed_base_url);
    println!();

    println!("[geocoder]");
    println!("url = \"{}\"", config.geocoder.url);
    println!("user_agent = \"{}\"", config.geocoder.user_agent);
    println!("limit = {}", config.geocoder.limit);
    println!("min_interval_ms = {}", config.geocoder.min_interval_ms);
    println!();

    println!("[server]");
    println!("host = \"{}\"", config.server.host);
    println!("port = {}", config.server.port);
    if let Some(dir) = &config.server.static_dir {
        println!("static_dir = \"{}\"", dir.display());
    }
}
