//! Decode command handler

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::share::{decode, Variant};
use clap::Args;

/// Decode command arguments
#[derive(Args)]
pub struct DecodeArgs {
    /// Share link or bare query string
    pub url: String,

    /// Read widget flags (zoom, interactive, controls) instead of `locate`
    #[arg(long)]
    pub embed: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: String,
}

/// Run the decode command
pub fn run(args: DecodeArgs) -> Result<()> {
    let config = Config::load()?;
    print!("{}", render(&args, &config)?);
    Ok(())
}

fn render(args: &DecodeArgs, config: &Config) -> Result<String> {
    let variant = if args.embed {
        Variant::Embed
    } else {
        Variant::General
    };
    let state = decode(&args.url, variant);

    let formatter = get_formatter(&args.format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", args.format)))?;
    let mut output = formatter.format(&state, config)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
