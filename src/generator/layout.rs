//! The built-in Markdown layout: header, table of contents, endpoints and
//! schemas, separated by blank lines. Sections without content are left out.

use crate::document::{Document, Schema};
use crate::formatter::{push_json_block, Formatter};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

// Slug patterns (compiled once)
#[allow(clippy::expect_used)]
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("Invalid slug character pattern"));
#[allow(clippy::expect_used)]
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid slug whitespace pattern"));

/// URL-fragment identifier for a heading: lower-cased, stripped of anything
/// but `[a-z0-9 -]`, with whitespace runs collapsed to `-`.
pub fn slug(heading: &str) -> String {
    let lowered = heading.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    WHITESPACE.replace_all(&stripped, "-").into_owned()
}

/// Render the whole document with the default layout.
pub fn render_default(document: &Document, formatter: &Formatter) -> String {
    let sections = [
        Some(header(document)),
        Some(table_of_contents(document)),
        endpoints(document, formatter),
        schemas(document, formatter),
    ];
    let sections: Vec<String> = sections.into_iter().flatten().collect();
    debug!(sections = sections.len(), "assembled default layout");
    sections.join("\n\n")
}

fn header(document: &Document) -> String {
    let info = document.info();
    let mut lines = vec![
        format!("# {}", info.title().unwrap_or_default()),
        String::new(),
    ];
    if let Some(description) = info.description() {
        lines.push(description.into_owned());
    }
    lines.push(String::new());
    lines.push("| | |".to_string());
    lines.push("|---|---|".to_string());
    lines.push(format!("| Version | {} |", info.version().unwrap_or_default()));
    if let Some(url) = document.base_url() {
        lines.push(format!("| Base URL | {url} |"));
    }
    lines.join("\n")
}

fn table_of_contents(document: &Document) -> String {
    let mut lines = vec![
        "## Table of Contents".to_string(),
        String::new(),
        "- [Endpoints](#endpoints)".to_string(),
    ];

    for (path, item) in document.paths() {
        for (method, _) in item.operations() {
            let anchor = slug(&format!("{method}-{path}"));
            lines.push(format!("  - [{} {path}](#{anchor})", method.to_uppercase()));
        }
    }

    if let Some(schemas) = document.schemas() {
        lines.push("- [Schemas](#schemas)".to_string());
        for name in schemas.keys() {
            lines.push(format!("  - [{name}](#{})", slug(name)));
        }
    }

    lines.join("\n")
}

fn endpoints(document: &Document, formatter: &Formatter) -> Option<String> {
    if !document.has_paths() {
        return None;
    }

    let mut lines = vec!["## Endpoints".to_string(), String::new()];
    let mut count = 0usize;
    for (path, item) in document.paths() {
        for (method, operation) in item.operations() {
            lines.push(formatter.format_endpoint(path, method, operation));
            lines.push(String::new());
            count += 1;
        }
    }
    debug!(operations = count, "rendered endpoints section");
    Some(lines.join("\n"))
}

fn schemas(document: &Document, formatter: &Formatter) -> Option<String> {
    let schemas = document.schemas()?;

    let mut lines = vec!["## Schemas".to_string(), String::new()];
    for (name, value) in schemas {
        let schema = Schema::from(value);
        lines.push(format!("### {name}"));
        lines.push(String::new());
        if let Some(description) = schema.description() {
            lines.push(description.into_owned());
        }
        lines.push(String::new());
        lines.push(formatter.format_schema(value));
        lines.push(String::new());

        if let Some(example) = schema.example() {
            push_json_block(&mut lines, "Example", example);
        }
    }
    debug!(schemas = schemas.len(), "rendered schemas section");
    Some(lines.join("\n"))
}
