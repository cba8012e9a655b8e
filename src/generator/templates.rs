//! User-supplied templates.
//!
//! Templates use Jinja syntax and are rendered with `minijinja`. Exactly two
//! names are bound:
//!
//! - `data` - the whole parsed document
//! - `formatter` - the [`Formatter`], whose `format_*` renderers are callable
//!   as methods
//!
//! ```jinja
//! # {{ data.info.title }}
//!
//! {% for path, item in data.paths|items %}
//! {% for method, operation in item|items %}
//! {{ formatter.format_endpoint(path, method, operation) }}
//! {% endfor %}
//! {% endfor %}
//! ```
//!
//! Printing or iterating an undefined name is an error; undefined values may
//! still be tested with `{% if %}`.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::formatter::Formatter;
use minijinja::value::{from_args, Object, ObjectRepr, Value};
use minijinja::{context, AutoEscape, Environment, ErrorKind, State, UndefinedBehavior};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Render the template at `path` against `document`.
///
/// # Errors
///
/// Returns [`Error::File`] when the template cannot be read or fails to render.
pub fn render_template(path: &Path, document: &Document, formatter: Formatter) -> Result<String> {
    let source = read_template(path)?;
    let env = template_environment();
    let ctx = context! {
        data => Value::from_serialize(document.as_value()),
        formatter => Value::from_object(formatter),
    };

    let rendered = env
        .render_str(&source, ctx)
        .map_err(|e| Error::file(format!("Failed to render template: {e}")))?;
    debug!(template = %path.display(), bytes = rendered.len(), "rendered template");
    Ok(rendered)
}

fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            Error::file(format!("Template file not found: {}", path.display()))
        }
        io::ErrorKind::PermissionDenied => Error::file(format!(
            "Permission denied reading template: {}",
            path.display()
        )),
        _ => Error::file(format!("Failed to read template {}: {e}", path.display())),
    })
}

fn template_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env
}

/// Convert a template argument back into the document data model.
fn to_json(value: &Value) -> std::result::Result<serde_json::Value, minijinja::Error> {
    serde_json::to_value(value)
        .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

impl Object for Formatter {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        args: &[Value],
    ) -> std::result::Result<Value, minijinja::Error> {
        let rendered = match method {
            "format_endpoint" => {
                let (path, verb, operation): (String, String, Value) = from_args(args)?;
                self.format_endpoint(&path, &verb, &to_json(&operation)?)
            }
            "format_parameters" => {
                let (parameters,): (Value,) = from_args(args)?;
                self.format_parameters(&to_json(&parameters)?)
            }
            "format_request_body" => {
                let (body,): (Value,) = from_args(args)?;
                self.format_request_body(&to_json(&body)?)
            }
            "format_responses" => {
                let (responses,): (Value,) = from_args(args)?;
                self.format_responses(&to_json(&responses)?)
            }
            "format_schema" => {
                let (schema,): (Value,) = from_args(args)?;
                self.format_schema(&to_json(&schema)?)
            }
            _ => return Err(minijinja::Error::from(ErrorKind::UnknownMethod)),
        };
        Ok(Value::from(rendered))
    }
}
