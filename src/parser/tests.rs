#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use serde_json::json;

fn violations(yaml: &str) -> Vec<String> {
    match parse_str(yaml, SourceFormat::Yaml) {
        Err(Error::Validation { errors }) => errors,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_accepts_minimal_document() {
    let doc = parse_str(
        "openapi: 3.0.3\ninfo:\n  title: Test\n  version: 1.0.0\npaths: {}\n",
        SourceFormat::Yaml,
    )
    .unwrap();
    assert_eq!(doc.openapi().as_deref(), Some("3.0.3"));
    assert_eq!(doc.info().title().as_deref(), Some("Test"));
}

#[test]
fn test_accepts_31() {
    assert!(parse_str(
        "openapi: 3.1.0\ninfo:\n  title: Test\n  version: 1.0.0\npaths: {}\n",
        SourceFormat::Yaml
    )
    .is_ok());
}

#[test]
fn test_rejects_unsupported_version() {
    let errors = violations("openapi: 2.0\ninfo:\n  title: Test\n  version: 1.0.0\npaths: {}\n");
    assert_eq!(
        errors,
        vec!["Unsupported OpenAPI version: 2.0. Only 3.0.x and 3.1.x are supported."]
    );
}

#[test]
fn test_missing_openapi() {
    let errors = violations("info:\n  title: Test\n  version: 1.0.0\npaths: {}\n");
    assert_eq!(errors, vec!["Missing required field: openapi"]);
}

#[test]
fn test_accumulates_in_check_order() {
    let errors = violations("info:\n  version: 1.0.0\n");
    assert_eq!(
        errors,
        vec![
            "Missing required field: openapi",
            "Missing required field: info.title",
            "Missing required field: paths",
        ]
    );
}

#[test]
fn test_missing_info_skips_title_and_version() {
    let errors = violations("openapi: 3.0.0\npaths: {}\n");
    assert_eq!(errors, vec!["Missing required field: info"]);
}

#[test]
fn test_empty_info_reports_both_fields() {
    let errors = violations("openapi: 3.0.0\ninfo: {}\n");
    assert_eq!(
        errors,
        vec![
            "Missing required field: info.title",
            "Missing required field: info.version",
            "Missing required field: paths",
        ]
    );
}

#[test]
fn test_non_mapping_root() {
    let errors = violations("- openapi\n- 3.0.0\n");
    assert_eq!(errors, vec![NOT_A_MAPPING]);
    let errors = violations("just a string\n");
    assert_eq!(errors, vec![NOT_A_MAPPING]);
}

#[test]
fn test_validate_does_not_short_circuit() {
    let mut errors = Vec::new();
    validate(&json!({ "openapi": "4.0", "info": { "title": "x" } }), &mut errors);
    assert_eq!(errors.len(), 3);
    assert!(errors[0].contains("4.0"));
    assert!(errors[1].contains("info.version"));
    assert!(errors[2].contains("paths"));
}

#[test]
fn test_null_and_false_fields_count_as_missing() {
    let mut errors = Vec::new();
    validate(
        &json!({
            "openapi": null,
            "info": { "title": false, "version": "1.0.0" },
            "paths": null
        }),
        &mut errors,
    );
    assert_eq!(
        errors,
        vec![
            "Missing required field: openapi",
            "Missing required field: info.title",
            "Missing required field: paths",
        ]
    );

    let mut errors = Vec::new();
    validate(
        &json!({ "openapi": "3.0.0", "info": false, "paths": {} }),
        &mut errors,
    );
    assert_eq!(errors, vec!["Missing required field: info"]);
}

#[test]
fn test_parser_valid_reflects_last_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.yaml");
    std::fs::write(&path, "openapi: 3.0.0\ninfo: {}\npaths: {}\n").unwrap();

    let mut parser = Parser::new(&path);
    assert!(parser.valid());
    assert!(parser.parse().is_err());
    assert!(!parser.valid());
    assert_eq!(parser.errors().len(), 2);

    std::fs::write(&path, "openapi: 3.0.0\ninfo:\n  title: T\n  version: '1'\npaths: {}\n").unwrap();
    assert!(parser.parse().is_ok());
    assert!(parser.valid());
    assert!(parser.errors().is_empty());
}

#[test]
fn test_parser_missing_file() {
    let mut parser = Parser::new("/path/to/nonexistent.yaml");
    let err = parser.parse().unwrap_err();
    assert_eq!(err, Error::file("File not found: /path/to/nonexistent.yaml"));
}
