//! Caller-supplied records consumed by the JSON-LD builders.
//!
//! Field names deserialize from camelCase so the same JSON the page
//! templates hold can be fed to the CLI unchanged.

use serde::Deserialize;
use serde_json::Value;

/// One question/answer pair of an FAQ section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A named link: breadcrumb trail entry or navigation item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Navigation entries share the breadcrumb shape.
pub type NavItem = BreadcrumbItem;

/// A person (team member, article author).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonInfo {
    pub name: String,
    pub job_title: Option<String>,
    pub url: Option<String>,
    pub same_as: Vec<String>,
    /// Organization-shaped record; the site organization when absent.
    pub works_for: Option<Value>,
    /// Name of the school or university.
    pub alumni_of: Option<String>,
}

/// A service offering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: String,
    pub description: String,
    pub url: Option<String>,
    pub area_served: Option<String>,
}

/// Contact page details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactPageInfo {
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Article author as written in post front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorInfo {
    pub name: String,
    pub url: Option<String>,
}

/// Blog post metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub excerpt: Option<String>,
    pub meta_description: Option<String>,
    pub cover: Option<String>,
    /// Publication date, ISO 8601 (e.g. "2025-01-01").
    pub date: String,
    pub updated: Option<String>,
    pub author: Option<AuthorInfo>,
    pub category: String,
    pub slug: String,
}

impl PostMeta {
    /// Site-relative path of the post: `<blog_path>/<category>/<slug>`.
    pub fn path(&self, blog_path: &str) -> String {
        format!("{}/{}/{}", blog_path, self.category, self.slug)
    }

    /// `metaDescription`, falling back to the excerpt.
    pub fn description(&self) -> Option<&str> {
        self.meta_description
            .as_deref()
            .or(self.excerpt.as_deref())
            .filter(|s| !s.is_empty())
    }
}
