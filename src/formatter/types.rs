use crate::document::Schema;
use serde_json::Value;

/// Shown when a fragment has no schema at all
pub const NOT_AVAILABLE: &str = "N/A";

/// Human-readable type of a schema fragment.
///
/// References render as the referenced name, arrays as `array[<item type>]`
/// (recursively), anything else as its declared `type`. A schema without a
/// type is an `object`; a missing schema is `N/A`.
pub fn extract_type(schema: Option<&Value>) -> String {
    let Some(value) = schema.filter(|v| !matches!(v, Value::Null | Value::Bool(false))) else {
        return NOT_AVAILABLE.to_string();
    };
    let schema = Schema::from(value);

    if let Some(name) = schema.reference_name() {
        return name;
    }
    match schema.type_name() {
        Some(_) if schema.is_array() && schema.items().is_some() => {
            format!("array[{}]", extract_type(schema.items()))
        }
        Some(type_name) => type_name,
        None => "object".to_string(),
    }
}

/// Canonical reason phrase for the status codes the layout names.
pub fn status_name(code: &str) -> &'static str {
    match code {
        "200" => "OK",
        "201" => "Created",
        "204" => "No Content",
        "400" => "Bad Request",
        "401" => "Unauthorized",
        "403" => "Forbidden",
        "404" => "Not Found",
        "500" => "Internal Server Error",
        _ => "",
    }
}
