//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sitemeta: canonical URLs, OG fallbacks and JSON-LD for the site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemeta.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = crate::config::CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the canonical URL of a site-relative path
    #[command(visible_alias = "c")]
    Canonical {
        /// Path such as `/blog/performance/foo` (omit for the site root)
        path: Option<String>,
    },

    /// Print the Open Graph fallback image URL for a title
    #[command(visible_alias = "og")]
    OgImage {
        /// Title rendered on the image (default: site name)
        title: Option<String>,
    },

    /// Print a JSON-LD record
    #[command(visible_alias = "j")]
    Jsonld {
        #[command(flatten)]
        args: JsonLdArgs,
    },

    /// Print the site-wide JSON-LD graph (Organization, WebSite, Blog)
    Site {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate the config file and print a summary
    Check,
}

/// JSON-LD command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct JsonLdArgs {
    /// Record type to build
    #[arg(value_enum)]
    pub kind: SchemaKind,

    /// JSON input record. Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// How JSON-LD is written to stdout.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Wrap output in `<script type="application/ld+json">`
    #[arg(short, long)]
    pub script: bool,
}

/// schema.org record types the `jsonld` command can build.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Organization (input: optional override object)
    Organization,
    /// Person (input: person object)
    Person,
    /// WebSite with SearchAction (input: optional override object)
    Website,
    /// Site navigation ItemList (input: array of {name, url})
    Navigation,
    /// Service (input: {name, description, url?, areaServed?})
    Service,
    /// FAQPage (input: array of {question, answer})
    Faq,
    /// ContactPage (input: optional {url?, description?})
    ContactPage,
    /// Blog (no input)
    Blog,
    /// Article (input: post metadata)
    Article,
    /// BreadcrumbList (input: array of {name, url})
    Breadcrumbs,
}

impl SchemaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Person => "person",
            Self::Website => "website",
            Self::Navigation => "navigation",
            Self::Service => "service",
            Self::Faq => "faq",
            Self::ContactPage => "contact-page",
            Self::Blog => "blog",
            Self::Article => "article",
            Self::Breadcrumbs => "breadcrumbs",
        }
    }

    /// Whether the record cannot be built without an input document.
    pub const fn requires_input(self) -> bool {
        matches!(
            self,
            Self::Person
                | Self::Navigation
                | Self::Service
                | Self::Faq
                | Self::Article
                | Self::Breadcrumbs
        )
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
