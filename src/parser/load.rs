use crate::error::{Error, Result};
use serde_json::{Map, Number, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Encoding of the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// `.json` files are decoded as JSON; everything else as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SourceFormat::Yaml => "YAML",
            SourceFormat::Json => "JSON",
        }
    }
}

/// Read the whole source file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "read source document");
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(Error::file(format!("File not found: {}", path.display())))
        }
        Err(e) => Err(Error::file(format!(
            "Failed to read file {}: {e}",
            path.display()
        ))),
    }
}

/// Decode source text into a generic tree with document-ordered maps.
pub fn decode(text: &str, format: SourceFormat) -> Result<Value> {
    match format {
        SourceFormat::Json => serde_json::from_str(text).map_err(|e| {
            // serde_json reports line 0 when no position is known
            let line = Some(e.line()).filter(|l| *l > 0);
            syntax_error(format, line, &e)
        }),
        SourceFormat::Yaml => {
            let mut value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| {
                let line = e.location().map(|l| l.line());
                syntax_error(format, line, &e)
            })?;
            value
                .apply_merge()
                .map_err(|e| syntax_error(format, e.location().map(|l| l.line()), &e))?;
            Ok(yaml_to_json(value))
        }
    }
}

fn syntax_error(format: SourceFormat, line: Option<usize>, cause: &dyn std::fmt::Display) -> Error {
    let message = match line {
        Some(line) => format!("{} syntax error at line {line}: {cause}", format.label()),
        None => format!("{} syntax error: {cause}", format.label()),
    };
    Error::Parse { message, line }
}

/// Convert a YAML tree into the JSON data model, stringifying non-string keys
/// so that `200:` and `"200":` address the same response.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => yaml_number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (k, v) in mapping {
                map.insert(yaml_key(k), yaml_to_json(v));
            }
            Value::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Null => String::new(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Number(n) => n.to_string(),
        Yaml::Tagged(tagged) => yaml_key(tagged.value),
        complex => yaml_to_json(complex).to_string(),
    }
}
