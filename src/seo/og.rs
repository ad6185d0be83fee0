//! Open Graph image fallback.
//!
//! Pages without a cover image point `og:image` at a dynamic image
//! endpoint that renders the page title.

use super::url::{absolutize, build_canonical};
use crate::config::SiteConfig;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Endpoint used when `seo.og_image` is not configured.
const DEFAULT_OG_ENDPOINT: &str = "/api/og";

/// Absolute base URL of the OG image endpoint.
pub fn og_image_base(config: &SiteConfig) -> String {
    match &config.seo.og_image {
        Some(base) => absolutize(config, base),
        None => build_canonical(config, DEFAULT_OG_ENDPOINT),
    }
}

/// OG image URL carrying `title` as a query parameter.
///
/// `None` falls back to the site name; an explicit empty title is kept.
pub fn build_og_image_fallback(config: &SiteConfig, title: Option<&str>) -> String {
    let title = title.unwrap_or(&config.site.name);
    let base = og_image_base(config);
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}title={}", encode_component(title))
}

/// Percent-encode like `encodeURIComponent`.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
