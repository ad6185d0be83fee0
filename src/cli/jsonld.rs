//! `jsonld` and `site` commands.
//!
//! Reads a JSON input record, hands it to the matching builder and writes
//! the result to stdout.

use super::args::{JsonLdArgs, OutputArgs, SchemaKind};
use crate::config::SiteConfig;
use crate::seo::{
    BreadcrumbItem, ContactPageInfo, FaqItem, Graph, JsonLd, NavItem, PersonInfo, PostMeta,
    ServiceInfo, to_json, to_script,
};
use crate::{debug, log};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Problems with the input record of a `jsonld` invocation.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("`{0}` needs an input record (JSON file path, or `-` for stdin)")]
    Missing(SchemaKind),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("input for `{kind}` is not valid JSON")]
    Syntax {
        kind: SchemaKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("input for `{kind}` does not match the expected shape")]
    Shape {
        kind: SchemaKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{0}` overrides must be a JSON object")]
    NotAnObject(SchemaKind),
}

/// Run the `jsonld` command.
pub fn run_jsonld(args: &JsonLdArgs, config: &SiteConfig) -> Result<()> {
    let input = read_input(args.kind, args.input.as_deref())?;
    let ld = JsonLd::new(config);

    match build(&ld, args.kind, input)? {
        Some(value) => {
            let mut stdout = io::stdout().lock();
            emit(&mut stdout, &value, args.output)
        }
        None => {
            log!("jsonld"; "`{}` input is empty, nothing to emit", args.kind);
            Ok(())
        }
    }
}

/// Run the `site` command: Organization, WebSite and Blog in one graph.
pub fn run_site(output: OutputArgs, config: &SiteConfig) -> Result<()> {
    let graph = site_graph(&JsonLd::new(config));
    let mut stdout = io::stdout().lock();
    emit(&mut stdout, &graph.into_value(), output)
}

/// Records every page of the site carries.
pub fn site_graph(ld: &JsonLd<'_>) -> Graph {
    Graph::new()
        .with(ld.organization(None))
        .with(ld.website(None))
        .with(ld.blog())
}

/// Write `value` as JSON or as a script element, newline terminated.
pub fn emit(out: &mut impl Write, value: &Value, output: OutputArgs) -> Result<()> {
    let text = if output.script {
        to_script(value, output.pretty)?
    } else {
        to_json(value, output.pretty)?
    };
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Read the input document, `-` meaning stdin.
fn read_input(kind: SchemaKind, path: Option<&Path>) -> Result<Option<Value>, InputError> {
    let Some(path) = path else {
        if kind.requires_input() {
            return Err(InputError::Missing(kind));
        }
        return Ok(None);
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| InputError::Io(path.to_path_buf(), err))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|err| InputError::Io(path.to_path_buf(), err))?
    };
    debug!("jsonld"; "read {} bytes of `{}` input", content.len(), kind);

    parse_input(kind, &content).map(Some)
}

fn parse_input(kind: SchemaKind, content: &str) -> Result<Value, InputError> {
    serde_json::from_str(content).map_err(|source| InputError::Syntax { kind, source })
}

/// Build the record for `kind` from an optional input document.
pub fn build(
    ld: &JsonLd<'_>,
    kind: SchemaKind,
    input: Option<Value>,
) -> Result<Option<Value>, InputError> {
    let input = input.filter(|v| !v.is_null());

    let value = match kind {
        SchemaKind::Organization => Some(ld.organization(overrides(kind, input.as_ref())?)),
        SchemaKind::Website => Some(ld.website(overrides(kind, input.as_ref())?)),
        SchemaKind::Blog => Some(ld.blog()),
        SchemaKind::ContactPage => {
            let page: Option<ContactPageInfo> = decode(kind, input)?;
            Some(ld.contact_page(&page.unwrap_or_default()))
        }
        SchemaKind::Person => {
            let person: Option<PersonInfo> = decode(kind, input)?;
            ld.person(person.as_ref())
        }
        SchemaKind::Service => {
            let service: ServiceInfo = require(kind, input)?;
            Some(ld.service(&service))
        }
        SchemaKind::Article => {
            let post: PostMeta = require(kind, input)?;
            Some(ld.article(&post))
        }
        SchemaKind::Faq => {
            let items: Option<Vec<FaqItem>> = decode(kind, input)?;
            ld.faq(items.as_deref())
        }
        SchemaKind::Breadcrumbs => {
            let items: Option<Vec<BreadcrumbItem>> = decode(kind, input)?;
            ld.breadcrumbs(items.as_deref())
        }
        SchemaKind::Navigation => {
            let items: Option<Vec<NavItem>> = decode(kind, input)?;
            ld.site_navigation(items.as_deref().unwrap_or_default())
        }
    };

    Ok(value)
}

fn overrides(
    kind: SchemaKind,
    input: Option<&Value>,
) -> Result<Option<&Map<String, Value>>, InputError> {
    match input {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(InputError::NotAnObject(kind)),
    }
}

fn decode<T: DeserializeOwned>(
    kind: SchemaKind,
    input: Option<Value>,
) -> Result<Option<T>, InputError> {
    input
        .map(|value| {
            serde_json::from_value(value).map_err(|source| InputError::Shape { kind, source })
        })
        .transpose()
}

fn require<T: DeserializeOwned>(kind: SchemaKind, input: Option<Value>) -> Result<T, InputError> {
    decode(kind, input)?.ok_or(InputError::Missing(kind))
}
