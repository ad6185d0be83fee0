//! Who the site is: Organization, Person, WebSite and ContactPage records.

use super::{ContactPageInfo, JsonLd, PersonInfo, insert_non_empty, merge, record};
use crate::config::AddressConfig;
use serde_json::{Map, Value, json};

/// Placeholder the SearchAction target is expanded with.
const SEARCH_TERM: &str = "search_term_string";

impl JsonLd<'_> {
    /// Full Organization record for the site, with `overrides` merged on top.
    pub fn organization(&self, overrides: Option<&Map<String, Value>>) -> Value {
        let mut org = record("Organization");
        org.extend(self.organization_fields());
        merge(&mut org, overrides);
        Value::Object(org)
    }

    /// Organization body without `@context`, for embedding.
    fn organization_fields(&self) -> Map<String, Value> {
        let site = &self.config.site;
        let mut org = Map::new();
        org.insert("name".into(), site.name.as_str().into());
        org.insert("url".into(), site.url.as_str().into());
        org.insert("logo".into(), self.logo_url().into());
        insert_non_empty(&mut org, "description", &site.description);
        insert_non_empty(&mut org, "email", &site.contact.email);
        insert_non_empty(&mut org, "telephone", &site.contact.phone);

        if !site.contact.email.is_empty() || !site.contact.phone.is_empty() {
            let mut point = Map::new();
            point.insert("@type".into(), "ContactPoint".into());
            point.insert("contactType".into(), "customer support".into());
            insert_non_empty(&mut point, "email", &site.contact.email);
            insert_non_empty(&mut point, "telephone", &site.contact.phone);
            insert_non_empty(&mut point, "availableLanguage", &site.language);
            org.insert("contactPoint".into(), Value::Object(point));
        }

        if let Some(address) = site.address.as_ref().filter(|a| !a.is_empty()) {
            org.insert("address".into(), postal_address(address));
        }

        if !site.social.is_empty() {
            let profiles: Vec<Value> = site.social.values().map(|p| p.as_str().into()).collect();
            org.insert("sameAs".into(), Value::Array(profiles));
        }

        org
    }

    /// Person record, or `None` when there is no person to describe.
    pub fn person(&self, person: Option<&PersonInfo>) -> Option<Value> {
        let person = person?;

        let mut map = record("Person");
        map.insert("name".into(), person.name.as_str().into());
        if let Some(job_title) = &person.job_title {
            insert_non_empty(&mut map, "jobTitle", job_title);
        }
        if let Some(url) = &person.url {
            insert_non_empty(&mut map, "url", &self.absolute(url));
        }
        if !person.same_as.is_empty() {
            map.insert("sameAs".into(), json!(person.same_as));
        }
        let works_for = person
            .works_for
            .clone()
            .unwrap_or_else(|| self.organization_ref());
        map.insert("worksFor".into(), works_for);
        if let Some(school) = &person.alumni_of {
            map.insert(
                "alumniOf".into(),
                json!({"@type": "EducationalOrganization", "name": school}),
            );
        }

        Some(Value::Object(map))
    }

    /// WebSite record with a sitelinks SearchAction.
    pub fn website(&self, overrides: Option<&Map<String, Value>>) -> Value {
        let site = &self.config.site;
        let target = format!(
            "{}?q={{{SEARCH_TERM}}}",
            self.canonical(&self.config.seo.search_path)
        );

        let mut map = record("WebSite");
        map.insert("name".into(), site.name.as_str().into());
        map.insert("url".into(), site.url.as_str().into());
        insert_non_empty(&mut map, "description", &site.description);
        insert_non_empty(&mut map, "inLanguage", &site.language);
        map.insert("publisher".into(), self.organization_ref());
        map.insert(
            "potentialAction".into(),
            json!({
                "@type": "SearchAction",
                "target": target,
                "query-input": format!("required name={SEARCH_TERM}"),
            }),
        );
        merge(&mut map, overrides);
        Value::Object(map)
    }

    /// ContactPage whose main entity is the site Organization.
    pub fn contact_page(&self, page: &ContactPageInfo) -> Value {
        let mut map = record("ContactPage");
        if let Some(url) = &page.url {
            insert_non_empty(&mut map, "url", &self.absolute(url));
        }
        if let Some(description) = &page.description {
            insert_non_empty(&mut map, "description", description);
        }

        let mut org = Map::new();
        org.insert("@type".into(), "Organization".into());
        org.extend(self.organization_fields());
        map.insert("mainEntity".into(), Value::Object(org));

        Value::Object(map)
    }
}

fn postal_address(address: &AddressConfig) -> Value {
    let mut map = Map::new();
    map.insert("@type".into(), "PostalAddress".into());
    insert_non_empty(&mut map, "streetAddress", &address.street);
    insert_non_empty(&mut map, "addressLocality", &address.city);
    insert_non_empty(&mut map, "addressRegion", &address.region);
    insert_non_empty(&mut map, "postalCode", &address.postal_code);
    insert_non_empty(&mut map, "addressCountry", &address.country);
    Value::Object(map)
}
