//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why `sitemeta.toml` could not be turned into a [`SiteConfig`](crate::config::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no `{0}` found in the current directory or any parent")]
    NotFound(PathBuf),

    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config is not valid TOML")]
    Toml(#[from] toml::de::Error),

    // no #[from]: the diagnostics render themselves, a source() would print them twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// How much a diagnostic matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Builders would emit broken structured data.
    Error,
    /// Output stays valid but probably not what was meant.
    Warning,
}

/// One finding about one config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    /// Suggested value or fix.
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            Severity::Error => Style::new().red().bold(),
            Severity::Warning => Style::new().yellow(),
        };
        write!(
            f,
            "{} {}: {}",
            "×".if_supports_color(Stream::Stderr, |t| t.style(marker)),
            self.field
                .as_str()
                .if_supports_color(Stream::Stderr, |t| t.cyan()),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n    {} {hint}",
                "hint:".if_supports_color(Stream::Stderr, |t| t.dimmed())
            )?;
        }
        Ok(())
    }
}

/// Every finding of one validation run, errors and warnings apart.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        let diagnostic = ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        };
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Warning, field, message.into(), Some(hint.into()));
    }

    /// Log warnings; they never fail a load.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "{} config warning(s):", self.warnings.len());
        for warning in &self.warnings {
            eprintln!("  {warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        let title = format!("sitemeta.toml has {count} {noun}:");
        writeln!(f, "{}", title.if_supports_color(Stream::Stderr, |t| t.bold()))?;
        for err in &self.errors {
            write!(f, "\n  {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("sitemeta.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io_err.to_string(), "cannot read `sitemeta.toml`");

        let missing = ConfigError::NotFound(PathBuf::from("sitemeta.toml"));
        assert!(missing.to_string().contains("any parent"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let diag = ConfigDiagnostics::new();
        assert!(diag.into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("site.url"), "missing", "set it");
        assert!(diag.has_errors());
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].severity, Severity::Error);
        assert_eq!(diag.errors()[0].hint.as_deref(), Some("set it"));
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn_with_hint(FieldPath::new("site.logo"), "no logo", "set site.logo");
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].severity, Severity::Warning);
        assert!(diag.errors().is_empty());
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_diagnostics_display_lists_fields() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.name"), "must not be empty");
        diag.error_with_hint(FieldPath::new("site.url"), "invalid URL", "use https://");
        let display = diag.to_string();
        assert_eq!(
            display,
            "sitemeta.toml has 2 problems:\n\n  \
             × site.name: must not be empty\n  \
             × site.url: invalid URL\n    hint: use https://"
        );
    }

    #[test]
    fn test_color_override_respected() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.name"), "must not be empty");
        assert!(!diag.to_string().contains('\u{1b}'));
    }
}
