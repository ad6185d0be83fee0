//! Canonical URL construction.
//!
//! Every absolute URL the crate emits goes through [`build_canonical`], so
//! the "no doubled separators outside `scheme://`" invariant holds for all
//! structured data as well.

use crate::config::SiteConfig;
use regex::Regex;
use std::sync::LazyLock;

/// Build the canonical absolute URL for a site-relative path.
///
/// - empty path: the configured base URL, unchanged
/// - otherwise: base URL + path with a single leading `/`, and every run
///   of `/` after the `scheme://` prefix collapsed into one
///
/// The collapse covers the query string and fragment too, so the result
/// never holds `//` outside the leading `scheme://`.
///
/// Unlike a plain concatenation onto the base URL, a path that is already
/// an absolute http(s) URL is kept as the URL to canonicalize and only gets
/// its separators collapsed.
///
/// # Examples
/// ```ignore
/// build_canonical(&config, "")           // "https://acme.example"
/// build_canonical(&config, "about")      // "https://acme.example/about"
/// build_canonical(&config, "//blog//x/") // "https://acme.example/blog/x/"
/// ```
pub fn build_canonical(config: &SiteConfig, path: &str) -> String {
    let base = config.site.url.as_str();
    if path.is_empty() {
        return base.to_string();
    }

    let joined = if is_absolute_http(path) {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };

    collapse_slashes(&joined)
}

/// Resolve a possibly site-relative URL against the site base.
///
/// Absolute and protocol-relative URLs are returned untouched; empty stays empty.
pub fn absolutize(config: &SiteConfig, url: &str) -> String {
    if url.starts_with('/') && !url.starts_with("//") {
        build_canonical(config, url)
    } else {
        url.to_string()
    }
}

fn is_absolute_http(path: &str) -> bool {
    url::Url::parse(path).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Collapse every run of `/` into one, leaving only the `scheme://`
/// separator intact.
fn collapse_slashes(url: &str) -> String {
    static RE_SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new("/{2,}").unwrap());

    match url.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => {
            format!("{scheme}://{}", RE_SLASHES.replace_all(rest, "/"))
        }
        _ => RE_SLASHES.replace_all(url, "/").into_owned(),
    }
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// ============================================================================
// tests
// ============================================================================
