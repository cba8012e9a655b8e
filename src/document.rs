//! # Document Module
//!
//! The parsed OpenAPI document and read-only views over its fragments.
//!
//! The document is kept as the generic decoded tree (a [`serde_json::Value`]
//! with insertion-ordered maps) so that templates see exactly what the author
//! wrote. Every fragment type below is a borrowed view over part of that tree
//! with typed accessors that return `None` (or an empty iterator) instead of
//! failing when a field is absent or has an unexpected shape.
//!
//! A field counts as present when it exists and is neither `null` nor `false`.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// Keys starting with this character are metadata, not operations
pub const SENTINEL_PREFIX: char = '$';

/// Path-item members that describe the path itself rather than an operation
const PATH_ITEM_FIELDS: [&str; 4] = ["summary", "description", "servers", "parameters"];

static NULL: Value = Value::Null;

/// Look up `key` on a mapping, treating `null` and `false` as absent.
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(v) => Some(v),
    }
}

/// Render a scalar for inline Markdown. Strings are used verbatim, anything
/// else is rendered as its JSON text.
pub(crate) fn text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

fn text_field<'a>(value: &'a Value, key: &str) -> Option<Cow<'a, str>> {
    field(value, key).map(text)
}

fn entries<'a>(value: Option<&'a Value>) -> impl Iterator<Item = (&'a str, &'a Value)> {
    value
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
}

/// A parsed OpenAPI document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document { root }
    }
}

impl Document {
    /// The full decoded tree
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// The declared `openapi` version, stringified when it is numeric
    pub fn openapi(&self) -> Option<Cow<'_, str>> {
        text_field(&self.root, "openapi")
    }

    /// The `info` block
    pub fn info(&self) -> Info<'_> {
        Info(field(&self.root, "info").unwrap_or(&NULL))
    }

    /// URL of the first declared server, if any
    pub fn base_url(&self) -> Option<Cow<'_, str>> {
        let first = field(&self.root, "servers")?.as_array()?.first()?;
        Some(text_field(first, "url").unwrap_or(Cow::Borrowed("")))
    }

    /// Whether at least one path is declared
    pub fn has_paths(&self) -> bool {
        self.paths().next().is_some()
    }

    /// Path items in document order
    pub fn paths(&self) -> impl Iterator<Item = (&str, PathItem<'_>)> {
        entries(field(&self.root, "paths")).map(|(path, item)| (path, PathItem(item)))
    }

    /// `components.schemas`, when declared and non-empty
    pub fn schemas(&self) -> Option<&Map<String, Value>> {
        field(&self.root, "components")
            .and_then(|c| field(c, "schemas"))
            .and_then(Value::as_object)
            .filter(|schemas| !schemas.is_empty())
    }
}

/// The `info` block of a document
#[derive(Debug, Clone, Copy)]
pub struct Info<'a>(&'a Value);

impl<'a> Info<'a> {
    pub fn title(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "title")
    }

    pub fn version(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "version")
    }

    pub fn description(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "description")
    }
}

/// All operations declared under one path
#[derive(Debug, Clone, Copy)]
pub struct PathItem<'a>(&'a Value);

impl<'a> PathItem<'a> {
    /// Operations keyed by method name, skipping sentinel-prefixed keys,
    /// `x-` extensions and path-level fields.
    pub fn operations(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        entries(Some(self.0)).filter(|(key, _)| is_operation_key(key))
    }
}

/// Whether a path-item key names an operation
pub fn is_operation_key(key: &str) -> bool {
    !key.starts_with(SENTINEL_PREFIX)
        && !key.starts_with("x-")
        && !PATH_ITEM_FIELDS.contains(&key)
}

/// One HTTP operation
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a>(&'a Value);

impl<'a> From<&'a Value> for Operation<'a> {
    fn from(value: &'a Value) -> Self {
        Operation(value)
    }
}

impl<'a> Operation<'a> {
    pub fn description(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "description")
    }

    pub fn parameters(&self) -> Option<&'a Value> {
        field(self.0, "parameters")
    }

    pub fn request_body(&self) -> Option<&'a Value> {
        field(self.0, "requestBody")
    }

    pub fn responses(&self) -> Option<&'a Value> {
        field(self.0, "responses")
    }
}

/// An operation parameter
#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a>(&'a Value);

impl<'a> From<&'a Value> for Parameter<'a> {
    fn from(value: &'a Value) -> Self {
        Parameter(value)
    }
}

impl<'a> Parameter<'a> {
    pub fn name(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "name")
    }

    /// The `in` member: path, query, header or cookie
    pub fn location(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "in")
    }

    pub fn schema(&self) -> Option<&'a Value> {
        field(self.0, "schema")
    }

    /// Defaults to `false` when absent
    pub fn required(&self) -> bool {
        field(self.0, "required").is_some()
    }

    pub fn description(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "description")
    }
}

/// A request body or response: optional description plus content by media type
#[derive(Debug, Clone, Copy)]
pub struct Body<'a>(&'a Value);

impl<'a> From<&'a Value> for Body<'a> {
    fn from(value: &'a Value) -> Self {
        Body(value)
    }
}

impl<'a> Body<'a> {
    pub fn description(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "description")
    }

    /// Media types in document order
    pub fn content(&self) -> impl Iterator<Item = (&'a str, MediaType<'a>)> {
        entries(field(self.0, "content")).map(|(ct, media)| (ct, MediaType(media)))
    }
}

/// Schema and example for one content type
#[derive(Debug, Clone, Copy)]
pub struct MediaType<'a>(&'a Value);

impl<'a> MediaType<'a> {
    pub fn schema(&self) -> Option<&'a Value> {
        field(self.0, "schema")
    }

    pub fn example(&self) -> Option<&'a Value> {
        field(self.0, "example")
    }
}

/// A schema: either a `$ref` or an inline definition
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a>(&'a Value);

impl<'a> From<&'a Value> for Schema<'a> {
    fn from(value: &'a Value) -> Self {
        Schema(value)
    }
}

impl<'a> Schema<'a> {
    /// The raw `$ref` target. When present it is the only member consulted.
    pub fn reference(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "$ref")
    }

    /// The referenced schema's name: the segment after the last `/`
    pub fn reference_name(&self) -> Option<String> {
        self.reference().map(|r| last_segment(&r).to_string())
    }

    /// The declared type. OpenAPI 3.1 type lists are joined with ` | `.
    pub fn type_name(&self) -> Option<String> {
        match field(self.0, "type")? {
            Value::Array(types) => Some(
                types
                    .iter()
                    .map(|t| text(t).into_owned())
                    .collect::<Vec<_>>()
                    .join(" | "),
            ),
            other => Some(text(other).into_owned()),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(field(self.0, "type"), Some(Value::String(t)) if t == "array")
    }

    pub fn items(&self) -> Option<&'a Value> {
        field(self.0, "items")
    }

    /// Properties in document order, when declared as a mapping
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        field(self.0, "properties").and_then(Value::as_object)
    }

    /// Whether `name` is listed in the schema's `required` array
    pub fn requires(&self, name: &str) -> bool {
        field(self.0, "required")
            .and_then(Value::as_array)
            .is_some_and(|required| required.iter().any(|r| r.as_str() == Some(name)))
    }

    pub fn description(&self) -> Option<Cow<'a, str>> {
        text_field(self.0, "description")
    }

    pub fn example(&self) -> Option<&'a Value> {
        field(self.0, "example")
    }
}

/// Final segment of a `/`-separated reference; trailing separators are ignored.
pub fn last_segment(reference: &str) -> &str {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
