//! `[site]` section configuration.
//!
//! Site identity consumed by every structured-data builder.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Acme Studio"
//! url = "https://acme.example"
//! logo = "/logo.png"
//!
//! [site.contact]
//! email = "hello@acme.example"
//! phone = "+91-98765-43210"
//!
//! [site.address]
//! street = "12 MG Road"
//! city = "Bengaluru"
//! region = "KA"
//! postal_code = "560001"
//! country = "IN"
//!
//! [site.social]
//! twitter = "https://twitter.com/acme"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Site identity: name, base URL, logo, contact and social profiles.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Display name, also the default OG image title.
    pub name: String,

    /// Absolute base URL without trailing slash (e.g. "https://acme.example").
    pub url: String,

    /// Logo URL; a site-relative path is resolved against `url`.
    pub logo: String,

    /// Short description of the organization.
    pub description: String,

    /// Language code (e.g., "en", "en-IN").
    pub language: String,

    pub contact: ContactConfig,

    /// Postal address, omitted from output when not configured.
    pub address: Option<AddressConfig>,

    /// Platform name -> profile URL. Emitted as `sameAs`, ordered by platform.
    pub social: BTreeMap<String, String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            logo: String::new(),
            description: String::new(),
            language: "en".into(),
            contact: ContactConfig::default(),
            address: None,
            social: BTreeMap::new(),
        }
    }
}

/// `[site.contact]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

/// `[site.address]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddressConfig {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressConfig {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }
}

/// Field paths of `[site]` for diagnostics.
pub struct SiteInfoFields {
    pub name: FieldPath,
    pub url: FieldPath,
    pub logo: FieldPath,
    pub email: FieldPath,
    pub social: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        name: FieldPath::new("site.name"),
        url: FieldPath::new("site.url"),
        logo: FieldPath::new("site.logo"),
        email: FieldPath::new("site.contact.email"),
        social: FieldPath::new("site.social"),
    };

    /// Base URL without surrounding whitespace or trailing slashes.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `url` must be an http(s) URL with a host
    /// - social profile URLs must parse
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name must not be empty",
                format!("set {}, e.g.: \"Acme Studio\"", Self::FIELDS.name),
            );
        }

        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site url is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        } else {
            validate_http_url(Self::FIELDS.url, &self.url, diag);
        }

        if self.logo.is_empty() {
            diag.warn_with_hint(
                Self::FIELDS.logo,
                "no logo configured, Organization records will carry an empty logo",
                format!("set {}, e.g.: \"/logo.png\"", Self::FIELDS.logo),
            );
        } else if !self.logo.starts_with('/') {
            validate_http_url(Self::FIELDS.logo, &self.logo, diag);
        }

        if !self.contact.email.is_empty() && !self.contact.email.contains('@') {
            diag.error(
                Self::FIELDS.email,
                format!("'{}' is not an email address", self.contact.email),
            );
        }

        for (platform, profile) in &self.social {
            if url::Url::parse(profile).is_err() {
                diag.error_with_hint(
                    Self::FIELDS.social,
                    format!("profile '{platform}' is not a valid URL: {profile}"),
                    "use the full profile URL, e.g. https://twitter.com/acme",
                );
            }
        }
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
pub(crate) fn validate_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}
