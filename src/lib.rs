//! sitemeta - SEO metadata for a marketing site.
//!
//! Builds canonical URLs, Open Graph fallback image URLs and schema.org
//! JSON-LD records from one static site configuration.
//!
//! ```ignore
//! let config = SiteConfig::from_str(include_str!("sitemeta.toml"))?;
//! let ld = JsonLd::new(&config);
//!
//! let url = ld.canonical("/blog/performance/foo");
//! let faq = ld.faq(Some(&items));
//! let script = to_script(&ld.article(&post), false)?;
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod seo;

pub use config::SiteConfig;
pub use seo::{JsonLd, build_canonical, build_og_image_fallback};
