//! sitemeta - canonical URLs, OG fallbacks and JSON-LD for a marketing site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitemeta::cli::{self, Cli};
use sitemeta::config::SiteConfig;
use sitemeta::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    cli::run(&cli, &config)
}
