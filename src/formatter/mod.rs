//! # Formatter Module
//!
//! Stateless renderers that turn one fragment of an OpenAPI document into a
//! Markdown fragment. They know nothing about the rest of the document and
//! never fail: absent or oddly-shaped optional fields render as a documented
//! default (`N/A`, an empty cell, `No`) or are left out.
//!
//! Every renderer takes the raw fragment as a [`serde_json::Value`] so the
//! same functions serve the default layout and user templates alike.
//!
//! | Renderer | Output |
//! |----------|--------|
//! | [`Formatter::format_endpoint`] | `### GET /path` plus parameters, body and responses |
//! | [`Formatter::format_parameters`] | Parameters table |
//! | [`Formatter::format_request_body`] | Content types with schema and example |
//! | [`Formatter::format_responses`] | One `####` section per status code |
//! | [`Formatter::format_schema`] | Reference name, or type and properties table |

mod markdown;
mod types;

#[cfg(test)]
mod tests;

pub use markdown::{escape_cell, pretty_json, push_json_block, table_header, table_row};
pub use types::{extract_type, status_name, NOT_AVAILABLE};

use crate::document::{field, Body, Operation, Parameter, Schema};
use serde_json::Value;

/// Markdown renderers for document fragments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Formatter
    }

    /// `### <METHOD> <path>` followed by the operation's description,
    /// parameters, request body and responses. Sections whose source field
    /// is absent are left out.
    pub fn format_endpoint(&self, path: &str, method: &str, operation: &Value) -> String {
        let operation = Operation::from(operation);
        let mut lines = vec![format!("### {} {}", method.to_uppercase(), path), String::new()];

        if let Some(description) = operation.description() {
            lines.push(description.into_owned());
        }
        lines.push(String::new());

        if let Some(parameters) = operation.parameters() {
            lines.push(self.format_parameters(parameters));
        }
        if let Some(body) = operation.request_body() {
            lines.push(self.format_request_body(body));
        }
        if let Some(responses) = operation.responses() {
            lines.push(self.format_responses(responses));
        }

        lines.join("\n")
    }

    /// Parameters table; empty string when there are no parameters.
    pub fn format_parameters(&self, parameters: &Value) -> String {
        let Some(parameters) = parameters.as_array().filter(|p| !p.is_empty()) else {
            return String::new();
        };

        let mut lines = vec!["**Parameters**:".to_string(), String::new()];
        lines.extend(table_header(&["Name", "Location", "Type", "Required", "Description"]));

        for param in parameters.iter().map(Parameter::from) {
            let name = param.name().unwrap_or(NOT_AVAILABLE.into());
            let location = param.location().unwrap_or(NOT_AVAILABLE.into());
            let type_name = extract_type(param.schema());
            let required = yes_no(param.required());
            let description = param.description().unwrap_or_default();
            let row: [&str; 5] = [&name, &location, &type_name, required, &description];
            lines.push(table_row(&row));
        }

        lines.push(String::new());
        lines.join("\n")
    }

    /// Request body description and, per content type, schema and example.
    pub fn format_request_body(&self, body: &Value) -> String {
        if is_absent(body) {
            return String::new();
        }
        let body = Body::from(body);

        let mut lines = vec!["**Request Body**:".to_string(), String::new()];
        if let Some(description) = body.description() {
            lines.push(description.into_owned());
            lines.push(String::new());
        }

        for (content_type, media) in body.content() {
            lines.push(format!("**Content-Type**: `{content_type}`"));
            lines.push(String::new());
            if let Some(schema) = media.schema() {
                lines.push(self.format_schema(schema));
            }
            if let Some(example) = media.example() {
                push_json_block(&mut lines, "Example", example);
            }
        }

        lines.join("\n")
    }

    /// One section per status code, in document order.
    pub fn format_responses(&self, responses: &Value) -> String {
        if is_absent(responses) {
            return String::new();
        }

        let mut lines = vec!["**Responses**:".to_string(), String::new()];
        for (code, response) in responses.as_object().into_iter().flatten() {
            let response = Body::from(response);
            lines.push(
                format!("#### {code} {}", status_name(code))
                    .trim_end()
                    .to_string(),
            );
            lines.push(String::new());
            if let Some(description) = response.description() {
                lines.push(description.into_owned());
            }
            lines.push(String::new());

            for (content_type, media) in response.content() {
                lines.push(format!("**Content-Type**: `{content_type}`"));
                lines.push(String::new());
                if let Some(schema) = media.schema() {
                    push_json_block(&mut lines, "Schema", schema);
                }
                if let Some(example) = media.example() {
                    push_json_block(&mut lines, "Example", example);
                }
            }
        }

        lines.join("\n")
    }

    /// A referenced schema renders only its name; an inline schema renders
    /// its type and a properties table.
    pub fn format_schema(&self, schema: &Value) -> String {
        if is_absent(schema) {
            return String::new();
        }
        let schema = Schema::from(schema);

        if let Some(name) = schema.reference_name() {
            return [format!("**Schema**: `{name}`"), String::new()].join("\n");
        }

        let mut lines = Vec::new();
        if let Some(type_name) = schema.type_name() {
            lines.push(format!("**Type**: {type_name}"));
        }
        lines.push(String::new());

        if let Some(properties) = schema.properties() {
            lines.push("**Properties**:".to_string());
            lines.push(String::new());
            lines.extend(table_header(&["Name", "Type", "Required", "Description"]));

            for (name, property) in properties {
                let type_name = extract_type(Some(property));
                let required = yes_no(schema.requires(name));
                let description = field(property, "description")
                    .map(crate::document::text)
                    .unwrap_or_default();
                let row: [&str; 4] = [name, &type_name, required, &description];
                lines.push(table_row(&row));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

fn is_absent(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Bool(false))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
