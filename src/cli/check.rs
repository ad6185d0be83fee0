//! `check` command: validate the config and summarize what builders will use.

use crate::config::SiteConfig;
use crate::log;
use crate::seo::{absolutize, build_canonical, og_image_base};
use anyhow::Result;
use std::io::{self, Write};

/// Print a summary of the loaded configuration.
///
/// Validation already ran during loading; this reports the effective values.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, config)?;
    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

fn write_summary(out: &mut impl Write, config: &SiteConfig) -> Result<()> {
    let site = &config.site;
    let seo = &config.seo;

    writeln!(out, "name:        {}", site.name)?;
    writeln!(out, "url:         {}", site.url)?;
    writeln!(out, "logo:        {}", absolutize(config, &site.logo))?;
    writeln!(out, "og image:    {}", og_image_base(config))?;
    writeln!(out, "search:      {}", build_canonical(config, &seo.search_path))?;
    writeln!(out, "blog:        {}", build_canonical(config, &seo.blog_path))?;
    writeln!(out, "area served: {}", seo.area_served)?;
    if !site.social.is_empty() {
        let platforms: Vec<&str> = site.social.keys().map(String::as_str).collect();
        writeln!(out, "social:      {}", platforms.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn test_summary() {
        let mut out = Vec::new();
        write_summary(&mut out, &test_config()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("url:         https://acme.example\n"));
        assert!(text.contains("og image:    https://acme.example/api/og\n"));
        assert!(text.contains("search:      https://acme.example/search\n"));
        assert!(text.contains("social:      linkedin, twitter\n"));
    }
}
