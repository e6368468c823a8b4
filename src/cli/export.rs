//! Export command handler
//!
//! Writes circles from the command line or from a share link as a document.

use crate::cli::parse_circle_args;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::share::{parse, ShareableState};
use clap::Args;
use std::path::{Path, PathBuf};

/// Export command arguments
#[derive(Args)]
pub struct ExportArgs {
    /// Circle as lat,lng,radius[,color] (repeat for several)
    #[arg(
        long = "circle",
        short = 'c',
        value_name = "LAT,LNG,RADIUS[,COLOR]",
        allow_hyphen_values = true,
        conflicts_with = "url"
    )]
    pub circles: Vec<String>,

    /// Take circles from a share link instead
    #[arg(long)]
    pub url: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to a file, or into a directory under the format's file name
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the export command
pub fn run(args: ExportArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let state = if let Some(url) = &args.url {
        parse(url)
    } else {
        ShareableState::new(parse_circle_args(&args.circles)?)
    };
    if state.is_empty() {
        return Err(Error::InvalidCircle(
            "Nothing to export: give --circle or a --url with circles".to_string(),
        ));
    }

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&state, &config)?;

    // Write output
    if let Some(path) = args.output {
        let path = resolve_output_path(&path, formatter.file_name());
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// A directory target gets the format's default file name appended
pub fn resolve_output_path(path: &Path, file_name: &str) -> PathBuf {
    if path.is_dir() {
        path.join(file_name)
    } else {
        path.to_path_buf()
    }
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
