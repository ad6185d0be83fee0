//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemeta.toml`:
//!
//! | Module | TOML Section | Purpose                                   |
//! |--------|--------------|-------------------------------------------|
//! | `site` | `[site]`     | Site identity, contact, address, social   |
//! | `seo`  | `[seo]`      | OG image endpoint, service area, paths    |

mod seo;
mod site;

pub use seo::SeoConfig;
pub use site::{AddressConfig, ContactConfig, SiteInfoConfig};
