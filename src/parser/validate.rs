//! Required-field checks for a decoded document.
//!
//! Every check runs, in a fixed order, against the same root mapping and
//! appends its findings to a shared list. The caller decides what to do with
//! the list once all checks have run.

use crate::document::{field, text};
use serde_json::Value;

/// Message recorded when the root is not a mapping
pub const NOT_A_MAPPING: &str = "OpenAPI specification must be a mapping";

/// Version prefixes accepted in the `openapi` field
const SUPPORTED_VERSIONS: [&str; 2] = ["3.0", "3.1"];

type Check = fn(&Value, &mut Vec<String>);

/// The checks, in the order their messages are reported
const CHECKS: [(&str, Check); 3] = [
    ("openapi", check_openapi_version),
    ("info", check_info),
    ("paths", check_paths),
];

/// Run every check against `root`, appending violation messages to `errors`.
pub fn validate(root: &Value, errors: &mut Vec<String>) {
    if !root.is_object() {
        errors.push(NOT_A_MAPPING.to_string());
        return;
    }

    for (name, check) in CHECKS {
        let before = errors.len();
        check(root, errors);
        tracing::trace!(check = name, violations = errors.len() - before, "ran validation check");
    }
}

fn check_openapi_version(root: &Value, errors: &mut Vec<String>) {
    let Some(version) = field(root, "openapi") else {
        errors.push("Missing required field: openapi".to_string());
        return;
    };

    let version = text(version);
    if SUPPORTED_VERSIONS.iter().any(|v| version.starts_with(*v)) {
        return;
    }
    errors.push(format!(
        "Unsupported OpenAPI version: {version}. Only 3.0.x and 3.1.x are supported."
    ));
}

fn check_info(root: &Value, errors: &mut Vec<String>) {
    let Some(info) = field(root, "info") else {
        errors.push("Missing required field: info".to_string());
        return;
    };

    if field(info, "title").is_none() {
        errors.push("Missing required field: info.title".to_string());
    }
    if field(info, "version").is_none() {
        errors.push("Missing required field: info.version".to_string());
    }
}

fn check_paths(root: &Value, errors: &mut Vec<String>) {
    if field(root, "paths").is_none() {
        errors.push("Missing required field: paths".to_string());
    }
}
