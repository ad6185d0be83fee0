//! Serialization of JSON-LD into `<script type="application/ld+json">`.

use super::schema::SCHEMA_CONTEXT;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Serialize `value` as JSON, compact or pretty.
pub fn to_json(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Wrap a record in a JSON-LD script element.
///
/// `<`, `>` and `&` are written as JSON unicode escapes, so string content
/// such as `</script>` cannot close the element early.
pub fn to_script(value: &Value, pretty: bool) -> serde_json::Result<String> {
    let json = to_json(value, pretty)?;
    Ok(format!(
        "<script type=\"application/ld+json\">{}</script>",
        escape_script(&json)
    ))
}

/// Characters unsafe inside a `<script>` body.
const SCRIPT_ESCAPE_CHARS: [char; 3] = ['<', '>', '&'];

/// Escape characters that could end or confuse a script element.
///
/// These only ever occur inside JSON strings, where `\u00XX` is valid.
fn escape_script(json: &str) -> Cow<'_, str> {
    if !json.contains(SCRIPT_ESCAPE_CHARS) {
        return Cow::Borrowed(json);
    }

    let mut result = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => result.push_str("\\u003c"),
            '>' => result.push_str("\\u003e"),
            '&' => result.push_str("\\u0026"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

// ============================================================================
// Graph
// ============================================================================

/// Several records combined into one `@graph` document.
///
/// Nested `@context` keys are dropped; the graph carries a single one.
///
/// # Example
/// ```ignore
/// let graph = Graph::new()
///     .with(ld.organization(None))
///     .with_opt(ld.breadcrumbs(Some(&trail)));
/// let script = to_script(&graph.into_value(), false)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Value>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut node: Value) {
        if let Some(obj) = node.as_object_mut() {
            obj.shift_remove("@context");
        }
        self.nodes.push(node);
    }

    pub fn with(mut self, node: Value) -> Self {
        self.push(node);
        self
    }

    /// Add `node` if the builder produced one.
    pub fn with_opt(mut self, node: Option<Value>) -> Self {
        if let Some(node) = node {
            self.push(node);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_value(self) -> Value {
        let mut map = Map::new();
        map.insert("@context".into(), SCHEMA_CONTEXT.into());
        map.insert("@graph".into(), Value::Array(self.nodes));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_script_compact() {
        let script = to_script(&json!({"@type": "Thing", "name": "A"}), false).unwrap();
        assert_eq!(
            script,
            r#"<script type="application/ld+json">{"@type":"Thing","name":"A"}</script>"#
        );
    }

    #[test]
    fn test_to_script_escapes_closing_tag() {
        let value = json!({"text": "</script><script>alert(1)</script> & more"});
        let script = to_script(&value, false).unwrap();

        let body = script
            .strip_prefix(r#"<script type="application/ld+json">"#)
            .and_then(|s| s.strip_suffix("</script>"))
            .unwrap();
        assert!(!body.contains('<'));
        assert!(!body.contains('>'));
        assert!(!body.contains('&'));

        // escapes decode back to the original text
        let decoded: Value = serde_json::from_str(body).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&json!({"a": 1}), true).unwrap();
        assert_eq!(json, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_escape_script_borrows_when_clean() {
        assert!(matches!(escape_script("{\"a\":1}"), Cow::Borrowed(_)));
    }

    mod graph {
        use super::*;

        #[test]
        fn test_strips_nested_context() {
            let graph = Graph::new()
                .with(json!({"@context": "https://schema.org", "@type": "Organization"}))
                .with_opt(None)
                .with_opt(Some(json!({"@context": "https://schema.org", "@type": "Blog"})));

            assert_eq!(graph.len(), 2);
            assert_eq!(
                graph.into_value(),
                json!({
                    "@context": "https://schema.org",
                    "@graph": [{"@type": "Organization"}, {"@type": "Blog"}]
                })
            );
        }

        #[test]
        fn test_empty_graph() {
            let graph = Graph::new();
            assert!(graph.is_empty());
            assert_eq!(graph.into_value()["@graph"], json!([]));
        }
    }
}
