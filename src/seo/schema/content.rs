//! What the site publishes: Service, Blog and Article records.

use super::{AuthorInfo, JsonLd, PostMeta, ServiceInfo, insert_non_empty, record};
use serde_json::{Map, Value, json};

impl JsonLd<'_> {
    /// Service record provided by the site Organization.
    pub fn service(&self, service: &ServiceInfo) -> Value {
        let config = self.config;
        let url = match &service.url {
            Some(url) if !url.is_empty() => self.absolute(url),
            _ => config.site.url.clone(),
        };
        let area_served = service
            .area_served
            .as_deref()
            .unwrap_or(&config.seo.area_served);

        let mut map = record("Service");
        map.insert("name".into(), service.name.as_str().into());
        map.insert("description".into(), service.description.as_str().into());
        map.insert("provider".into(), self.organization_ref());
        map.insert("areaServed".into(), area_served.into());
        map.insert("url".into(), url.into());
        Value::Object(map)
    }

    /// Blog record for the site blog index.
    pub fn blog(&self) -> Value {
        let site = &self.config.site;

        let mut map = record("Blog");
        map.insert("name".into(), format!("{} Blog", site.name).into());
        map.insert("url".into(), self.canonical(&self.config.seo.blog_path).into());
        insert_non_empty(&mut map, "description", &site.description);
        insert_non_empty(&mut map, "inLanguage", &site.language);
        map.insert("publisher".into(), self.organization_ref());
        Value::Object(map)
    }

    /// Article record for a blog post.
    ///
    /// - `image`: the cover, else the OG fallback rendered from the title
    /// - `author`: the post author as a Person, else the site Organization
    /// - `dateModified`: `updated`, else `date`
    pub fn article(&self, post: &PostMeta) -> Value {
        let canonical = self.canonical(&post.path(&self.config.seo.blog_path));
        let image = match &post.cover {
            Some(cover) if !cover.is_empty() => self.absolute(cover),
            _ => self.og_image(Some(&post.title)),
        };
        let author = match &post.author {
            Some(author) if !author.name.is_empty() => self.author(author),
            _ => self.organization_ref(),
        };
        let modified = post
            .updated
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&post.date);

        let mut map = record("Article");
        map.insert("headline".into(), post.title.as_str().into());
        if let Some(description) = post.description() {
            map.insert("description".into(), description.into());
        }
        map.insert("image".into(), image.into());
        map.insert("datePublished".into(), post.date.as_str().into());
        map.insert("dateModified".into(), modified.into());
        map.insert("author".into(), author);
        map.insert("publisher".into(), self.organization_ref());
        map.insert(
            "mainEntityOfPage".into(),
            json!({"@type": "WebPage", "@id": canonical}),
        );
        insert_non_empty(&mut map, "articleSection", &post.category);
        insert_non_empty(&mut map, "inLanguage", &self.config.site.language);
        Value::Object(map)
    }

    fn author(&self, author: &AuthorInfo) -> Value {
        let mut map = Map::new();
        map.insert("@type".into(), "Person".into());
        map.insert("name".into(), author.name.as_str().into());
        if let Some(url) = &author.url {
            insert_non_empty(&mut map, "url", &self.absolute(url));
        }
        Value::Object(map)
    }
}
