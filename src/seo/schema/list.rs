//! Ordered lists: FAQPage, BreadcrumbList and site navigation.
//!
//! Input order is output order, `position` counts from 1.

use super::{BreadcrumbItem, FaqItem, JsonLd, NavItem, record};
use serde_json::{Value, json};

impl JsonLd<'_> {
    /// FAQPage with one Question per item; `None` for no items.
    pub fn faq(&self, items: Option<&[FaqItem]>) -> Option<Value> {
        let items = items.filter(|items| !items.is_empty())?;

        let questions: Vec<Value> = items
            .iter()
            .map(|item| {
                json!({
                    "@type": "Question",
                    "name": item.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": item.answer,
                    },
                })
            })
            .collect();

        let mut map = record("FAQPage");
        map.insert("mainEntity".into(), Value::Array(questions));
        Some(Value::Object(map))
    }

    /// BreadcrumbList; `None` for an empty or absent trail.
    pub fn breadcrumbs(&self, items: Option<&[BreadcrumbItem]>) -> Option<Value> {
        let items = items.filter(|items| !items.is_empty())?;

        let elements = self.positioned(items, |position, item, url| {
            json!({
                "@type": "ListItem",
                "position": position,
                "name": item.name,
                "item": url,
            })
        });

        let mut map = record("BreadcrumbList");
        map.insert("itemListElement".into(), Value::Array(elements));
        Some(Value::Object(map))
    }

    /// ItemList of SiteNavigationElement; `None` for no items.
    pub fn site_navigation(&self, items: &[NavItem]) -> Option<Value> {
        if items.is_empty() {
            return None;
        }

        let elements = self.positioned(items, |position, item, url| {
            json!({
                "@type": "SiteNavigationElement",
                "position": position,
                "name": item.name,
                "url": url,
            })
        });

        let mut map = record("ItemList");
        map.insert("itemListElement".into(), Value::Array(elements));
        Some(Value::Object(map))
    }

    /// Map items to list elements with 1-based positions and absolute URLs.
    fn positioned<F>(&self, items: &[BreadcrumbItem], element: F) -> Vec<Value>
    where
        F: Fn(usize, &BreadcrumbItem, String) -> Value,
    {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| element(i + 1, item, self.absolute(&item.url)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    mod faq {
        use super::*;

        #[test]
        fn test_empty_and_absent() {
            let config = test_config();
            let ld = JsonLd::new(&config);
            assert_eq!(ld.faq(Some(&[])), None);
            assert_eq!(ld.faq(None), None);
        }

        #[test]
        fn test_questions_in_order() {
            let config = test_config();
            let items = [FaqItem::new("Q1", "A1"), FaqItem::new("Q2", "A2")];
            let faq = JsonLd::new(&config).faq(Some(&items)).unwrap();

            assert_eq!(
                faq,
                json!({
                    "@context": "https://schema.org",
                    "@type": "FAQPage",
                    "mainEntity": [
                        {
                            "@type": "Question",
                            "name": "Q1",
                            "acceptedAnswer": {"@type": "Answer", "text": "A1"}
                        },
                        {
                            "@type": "Question",
                            "name": "Q2",
                            "acceptedAnswer": {"@type": "Answer", "text": "A2"}
                        }
                    ]
                })
            );
        }

        #[test]
        fn test_text_reproduced_verbatim() {
            let config = test_config();
            let answer = "Yes. <b>Really</b> & \"quoted\"\n  with whitespace ";
            let items = [FaqItem::new("Is it fast?", answer)];
            let faq = JsonLd::new(&config).faq(Some(&items)).unwrap();
            assert_eq!(faq["mainEntity"][0]["acceptedAnswer"]["text"], answer);
        }
    }

    mod breadcrumbs {
        use super::*;

        #[test]
        fn test_positions_follow_input_order() {
            let config = test_config();
            let items = [
                BreadcrumbItem::new("Home", "https://x/"),
                BreadcrumbItem::new("Blog", "https://x/blog"),
            ];
            let list = JsonLd::new(&config).breadcrumbs(Some(&items)).unwrap();

            assert_eq!(list["@type"], "BreadcrumbList");
            assert_eq!(
                list["itemListElement"],
                json!([
                    {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://x/"},
                    {"@type": "ListItem", "position": 2, "name": "Blog", "item": "https://x/blog"}
                ])
            );
        }

        #[test]
        fn test_relative_urls_resolved() {
            let config = test_config();
            let items = [
                BreadcrumbItem::new("Home", "/"),
                BreadcrumbItem::new("Compare", "/compare/"),
            ];
            let list = JsonLd::new(&config).breadcrumbs(Some(&items)).unwrap();
            assert_eq!(list["itemListElement"][0]["item"], "https://acme.example/");
            assert_eq!(
                list["itemListElement"][1]["item"],
                "https://acme.example/compare/"
            );
        }

        #[test]
        fn test_empty_and_absent() {
            let config = test_config();
            let ld = JsonLd::new(&config);
            assert_eq!(ld.breadcrumbs(Some(&[])), None);
            assert_eq!(ld.breadcrumbs(None), None);
        }
    }

    mod site_navigation {
        use super::*;

        #[test]
        fn test_elements() {
            let config = test_config();
            let items = [
                NavItem::new("Services", "/services"),
                NavItem::new("Blog", "/blog"),
                NavItem::new("Contact", "/contact"),
            ];
            let nav = JsonLd::new(&config).site_navigation(&items).unwrap();

            assert_eq!(nav["@type"], "ItemList");
            let elements = nav["itemListElement"].as_array().unwrap();
            assert_eq!(elements.len(), 3);
            for (i, element) in elements.iter().enumerate() {
                assert_eq!(element["@type"], "SiteNavigationElement");
                assert_eq!(element["position"], i + 1);
                assert_eq!(element["name"], items[i].name.as_str());
            }
            assert_eq!(elements[2]["url"], "https://acme.example/contact");
        }

        #[test]
        fn test_empty() {
            let config = test_config();
            assert_eq!(JsonLd::new(&config).site_navigation(&[]), None);
        }
    }
}
