//! `[seo]` section configuration.
//!
//! Defaults consumed by the URL helpers and structured-data builders.

use super::site::validate_http_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;

/// SEO defaults: OG image endpoint, service area and well-known paths.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeoConfig {
    /// Base URL of the OG image endpoint. Defaults to `<site.url>/api/og`.
    pub og_image: Option<String>,

    /// Default `areaServed` for Service records.
    pub area_served: String,

    /// Site search page, target of the WebSite SearchAction.
    pub search_path: String,

    /// Blog index, used by the Blog record and article URLs.
    pub blog_path: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            og_image: None,
            area_served: "IN".into(),
            search_path: "/search".into(),
            blog_path: "/blog".into(),
        }
    }
}

pub struct SeoFields {
    pub og_image: FieldPath,
    pub area_served: FieldPath,
    pub search_path: FieldPath,
    pub blog_path: FieldPath,
}

impl SeoConfig {
    pub const FIELDS: SeoFields = SeoFields {
        og_image: FieldPath::new("seo.og_image"),
        area_served: FieldPath::new("seo.area_served"),
        search_path: FieldPath::new("seo.search_path"),
        blog_path: FieldPath::new("seo.blog_path"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(og_image) = &self.og_image
            && !og_image.starts_with('/')
        {
            validate_http_url(Self::FIELDS.og_image, og_image, diag);
        }

        if self.area_served.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.area_served,
                "area served must not be empty",
                "use a country code or region name, e.g. \"IN\"",
            );
        }

        for (field, path) in [
            (Self::FIELDS.search_path, &self.search_path),
            (Self::FIELDS.blog_path, &self.blog_path),
        ] {
            if !path.starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!("'{path}' must be a site-relative path"),
                    format!("use a leading slash, e.g. \"/{}\"", path.trim_start_matches('/')),
                );
            }
        }
    }
}
