//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A dotted path to a field in `sitemeta.toml`.
///
/// Section structs expose their paths through a `FIELDS` constant so that
/// diagnostics never spell a key by hand.
///
/// # Example
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// // -> [site.url]
/// //    → required
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Backticked and colored, for hints that name another key.
impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_path() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("site.logo").to_string(), "`site.logo`");
    }
}
