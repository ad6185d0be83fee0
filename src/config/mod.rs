//! Site configuration management for `sitemeta.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] and sub-tables
//! │   └── seo        # [seo]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded `SiteConfig` is immutable: it is built once by
//! [`SiteConfig::load`] and then handed by reference to every builder.

pub mod section;
pub mod types;
mod util;

pub use section::{AddressConfig, ContactConfig, SeoConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};
pub use util::{find_config_file, find_config_file_from};

use crate::{debug, log};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "sitemeta.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemeta.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site identity
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// SEO defaults
    #[serde(default)]
    pub seo: SeoConfig,
}

impl SiteConfig {
    /// Locate, parse, normalize and validate the config file.
    ///
    /// `config` may be a bare file name (searched upward from cwd) or a path.
    pub fn load(config: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config) else {
            bail!(ConfigError::NotFound(config.to_path_buf()));
        };
        debug!("config"; "loading {}", config_path.display());

        let mut loaded = Self::from_path(&config_path)?;
        loaded.config_path = config_path;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        config.finalize();
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.finalize();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Normalize values after parsing.
    ///
    /// The base URL never carries a trailing slash so that path joins
    /// only ever need a single leading slash on the path side.
    fn finalize(&mut self) {
        self.site.url = self.site.base_url().to_string();
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section check without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.seo.validate(&mut diag);
        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!(
        "[site]\nname = \"Acme Studio\"\nurl = \"https://acme.example\"\nlogo = \"https://acme.example/logo.png\"\n{extra}"
    );
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize();
    parsed
}

/// Fully populated config shared by builder tests.
#[cfg(test)]
pub fn test_config() -> SiteConfig {
    test_parse_config(
        r#"
description = "Performance engineering for the web"

[site.contact]
email = "hello@acme.example"
phone = "+91-98765-43210"

[site.address]
street = "12 MG Road"
city = "Bengaluru"
region = "KA"
postal_code = "560001"
country = "IN"

[site.social]
twitter = "https://twitter.com/acme"
linkedin = "https://www.linkedin.com/company/acme"
"#,
    )
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::from_str("[site\nname = \"Acme\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.name, "");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.seo.area_served, "IN");
    }

    #[test]
    fn test_from_str_trims_trailing_slash() {
        let config =
            SiteConfig::from_str("[site]\nname = \"Acme\"\nurl = \"https://acme.example/\"")
                .unwrap();
        assert_eq!(config.site.url, "https://acme.example");
    }

    #[test]
    fn test_from_str_trims_padded_url() {
        let config =
            SiteConfig::from_str("[site]\nname = \"Acme\"\nurl = \"https://acme.example/ \"")
                .unwrap();
        assert!(!config.diagnostics().has_errors());
        assert_eq!(config.site.url, "https://acme.example");
        assert_eq!(crate::seo::build_canonical(&config, ""), "https://acme.example");
    }

    #[test]
    fn test_full_config_parses() {
        let config = test_config();
        assert_eq!(config.site.contact.phone, "+91-98765-43210");
        assert_eq!(
            config.site.address.as_ref().map(|a| a.city.as_str()),
            Some("Bengaluru")
        );
        assert_eq!(
            config.site.social.keys().collect::<Vec<_>>(),
            vec!["linkedin", "twitter"]
        );
        assert!(!config.diagnostics().has_errors());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Acme\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "Acme");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nname = \"Acme\"\n[seo]\narea_served = \"Worldwide\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.seo.area_served, "Worldwide");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[site]\nname = \"Acme\"\nurl = \"https://acme.example/\"\nlogo = \"/logo.png\"\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.site.url, "https://acme.example");
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site]\nname = \"\"\nurl = \"not a url\"\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        let diag = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("expected diagnostics, got {other:?}"),
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"site.name"));
        assert!(fields.contains(&"site.url"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SiteConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
