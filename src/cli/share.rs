//! Share command handler
//!
//! Encodes circles given on the command line into a map link.

use crate::cli::parse_circle_args;
use crate::config::Config;
use crate::constants::share::{MAX_ZOOM, MIN_ZOOM};
use crate::error::Result;
use crate::format::url::UrlFormatter;
use crate::share::ShareableState;
use clap::Args;

/// Share command arguments
#[derive(Args)]
pub struct ShareArgs {
    /// Circle as lat,lng,radius[,color] (repeat for several)
    #[arg(
        long = "circle",
        short = 'c',
        value_name = "LAT,LNG,RADIUS[,COLOR]",
        required = true,
        allow_hyphen_values = true
    )]
    pub circles: Vec<String>,

    /// Ask the map to locate the viewer on load
    #[arg(long, conflicts_with = "embed")]
    pub locate: bool,

    /// Build a link for the embeddable widget
    #[arg(long)]
    pub embed: bool,

    /// Fixed widget zoom level
    #[arg(
        long,
        requires = "embed",
        value_parser = clap::value_parser!(u8).range(MIN_ZOOM as i64..=MAX_ZOOM as i64)
    )]
    pub zoom: Option<u8>,

    /// Disable panning and zooming in the widget
    #[arg(long, requires = "embed")]
    pub no_interactive: bool,

    /// Hide the widget's map controls
    #[arg(long, requires = "embed")]
    pub no_controls: bool,

    /// Override the configured base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Run the share command
pub fn run(args: ShareArgs) -> Result<()> {
    let config = Config::load()?;
    println!("{}", share_url(&args, &config)?);
    Ok(())
}

/// Build the link described by `args`
pub fn share_url(args: &ShareArgs, config: &Config) -> Result<String> {
    let state = ShareableState {
        circles: parse_circle_args(&args.circles)?,
        locate_on_load: args.locate,
        zoom: args.zoom,
        interactive: !args.no_interactive,
        show_controls: !args.no_controls,
    };

    let base = args.base_url.as_deref();
    let url = if args.embed {
        UrlFormatter.format_embed(&state, base, config)
    } else {
        UrlFormatter.format_with_base(&state, base, config)
    };

    Ok(url)
}
