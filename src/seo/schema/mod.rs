//! schema.org JSON-LD builders.
//!
//! | Module     | Records                                         |
//! |------------|-------------------------------------------------|
//! | `identity` | Organization, Person, WebSite, ContactPage      |
//! | `content`  | Service, Blog, Article                          |
//! | `list`     | FAQPage, BreadcrumbList, site navigation        |
//! | `input`    | Caller-supplied records                         |
//!
//! Builders are pure: the output depends only on the input record and the
//! [`SiteConfig`] the [`JsonLd`] was created with. Builders that have
//! nothing to describe return `None`.
//!
//! Key names are schema.org vocabulary and must stay verbatim. Key order is
//! stable (`serde_json` with `preserve_order`).

mod content;
mod identity;
mod input;
mod list;

pub use input::{
    AuthorInfo, BreadcrumbItem, ContactPageInfo, FaqItem, NavItem, PersonInfo, PostMeta,
    ServiceInfo,
};

use super::og::build_og_image_fallback;
use super::url::{absolutize, build_canonical};
use crate::config::SiteConfig;
use serde_json::{Map, Value, json};

/// Value of every top-level `@context`.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Structured-data builder bound to one site configuration.
#[derive(Debug, Clone, Copy)]
pub struct JsonLd<'a> {
    config: &'a SiteConfig,
}

impl<'a> JsonLd<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &'a SiteConfig {
        self.config
    }

    /// See [`build_canonical`].
    pub fn canonical(&self, path: &str) -> String {
        build_canonical(self.config, path)
    }

    /// See [`build_og_image_fallback`].
    pub fn og_image(&self, title: Option<&str>) -> String {
        build_og_image_fallback(self.config, title)
    }

    fn absolute(&self, url: &str) -> String {
        absolutize(self.config, url)
    }

    fn logo_url(&self) -> String {
        self.absolute(&self.config.site.logo)
    }

    /// Compact Organization used as `publisher`, `provider` or `worksFor`.
    pub fn organization_ref(&self) -> Value {
        let site = &self.config.site;
        json!({
            "@type": "Organization",
            "name": site.name,
            "url": site.url,
            "logo": {
                "@type": "ImageObject",
                "url": self.logo_url(),
            },
        })
    }
}

/// Start a top-level record: `@context` followed by `@type`.
fn record(schema_type: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".into(), SCHEMA_CONTEXT.into());
    map.insert("@type".into(), schema_type.into());
    map
}

/// Insert `value` under `key` unless it is empty.
fn insert_non_empty(map: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        map.insert(key.into(), value.into());
    }
}

/// Shallow merge: every key of `overrides` replaces the one in `base`.
fn merge(base: &mut Map<String, Value>, overrides: Option<&Map<String, Value>>) {
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }
}
