//! Command-line interface module.

mod args;
pub mod check;
pub mod jsonld;

pub use args::{Cli, Commands, JsonLdArgs, OutputArgs, SchemaKind};

use crate::config::SiteConfig;
use crate::seo::{build_canonical, build_og_image_fallback};
use anyhow::Result;

/// Dispatch a parsed command against a loaded configuration.
pub fn run(cli: &Cli, config: &SiteConfig) -> Result<()> {
    match &cli.command {
        Commands::Canonical { path } => {
            println!("{}", build_canonical(config, path.as_deref().unwrap_or_default()));
            Ok(())
        }
        Commands::OgImage { title } => {
            println!("{}", build_og_image_fallback(config, title.as_deref()));
            Ok(())
        }
        Commands::Jsonld { args } => jsonld::run_jsonld(args, config),
        Commands::Site { output } => jsonld::run_site(*output, config),
        Commands::Check => check::run_check(config),
    }
}
