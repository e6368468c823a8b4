//! Serve command handler
//!
//! Runs the map page and HTTP API in the foreground.

use crate::config::Config;
use crate::error::Result;
use crate::server;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Serve command arguments
#[derive(Args)]
pub struct ServeArgs {
    /// Host address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Serve the map page from this directory
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded config
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = self.static_dir {
            config.server.static_dir = Some(dir);
        }
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.apply(&mut config);

    info!(
        "radius-map v{} serving on http://{}",
        env!("CARGO_PKG_VERSION"),
        config.server_addr()
    );
    info!(
        "Geocoder {} limited to one request per {} ms",
        config.geocoder.url, config.geocoder.min_interval_ms
    );

    server::run(config).await
}
