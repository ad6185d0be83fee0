//! SEO metadata: canonical URLs, Open Graph fallbacks and JSON-LD.
//!
//! | Module   | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `url`    | Canonical URL builder, relative URL resolution   |
//! | `og`     | OG image fallback URL                            |
//! | `schema` | schema.org JSON-LD builders                      |
//! | `script` | `<script type="application/ld+json">` rendering  |
//!
//! Everything here is a pure function of its input and the [`SiteConfig`]
//! passed in.
//!
//! [`SiteConfig`]: crate::config::SiteConfig

pub mod og;
pub mod schema;
pub mod script;
pub mod url;

pub use og::{build_og_image_fallback, og_image_base};
pub use schema::{
    AuthorInfo, BreadcrumbItem, ContactPageInfo, FaqItem, JsonLd, NavItem, PersonInfo, PostMeta,
    SCHEMA_CONTEXT, ServiceInfo,
};
pub use script::{Graph, to_json, to_script};
pub use self::url::{absolutize, build_canonical};
