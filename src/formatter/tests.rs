#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use serde_json::json;

fn fmt() -> Formatter {
    Formatter::new()
}

#[test]
fn test_get_endpoint() {
    let operation = json!({
        "description": "Get all users",
        "parameters": [
            { "name": "limit", "in": "query", "schema": { "type": "integer" }, "required": false }
        ]
    });
    let out = fmt().format_endpoint("/users", "get", &operation);
    assert!(out.starts_with("### GET /users\n\nGet all users\n"));
    assert!(out.contains("| limit | query | integer | No |"));
}

#[test]
fn test_post_endpoint_with_all_sections() {
    let operation = json!({
        "description": "Test endpoint",
        "parameters": [
            { "name": "id", "in": "path", "schema": { "type": "string" }, "required": true }
        ],
        "requestBody": {
            "content": { "application/json": { "schema": { "type": "object" } } }
        },
        "responses": { "200": { "description": "OK" } }
    });
    let out = fmt().format_endpoint("/test", "post", &operation);
    assert!(out.contains("### POST /test"));
    assert!(out.contains("Test endpoint"));

    let params = out.find("**Parameters**:").unwrap();
    let body = out.find("**Request Body**:").unwrap();
    let responses = out.find("**Responses**:").unwrap();
    assert!(params < body && body < responses);
}

#[test]
fn test_endpoint_without_description_or_sections() {
    let out = fmt().format_endpoint("/test", "get", &json!({ "parameters": [] }));
    assert_eq!(out, "### GET /test\n\n\n");
    assert!(!out.contains("description"));
}

#[test]
fn test_parameters_table() {
    let params = json!([
        { "name": "id", "in": "path", "schema": { "type": "string" }, "required": true, "description": "User ID" },
        { "name": "limit", "in": "query", "schema": { "type": "integer" } }
    ]);
    let out = fmt().format_parameters(&params);
    let expected = "\
**Parameters**:

| Name | Location | Type | Required | Description |
|------|----------|------|----------|-------------|
| id | path | string | Yes | User ID |
| limit | query | integer | No |  |
";
    assert_eq!(out, expected);
}

#[test]
fn test_parameters_defaults() {
    let out = fmt().format_parameters(&json!([{}]));
    assert!(out.contains("| N/A | N/A | N/A | No |  |"));
}

#[test]
fn test_parameters_empty_or_null() {
    assert_eq!(fmt().format_parameters(&Value::Null), "");
    assert_eq!(fmt().format_parameters(&json!([])), "");
}

#[test]
fn test_parameter_ref_type() {
    let params = json!([
        { "name": "filter", "in": "query", "schema": { "$ref": "#/components/schemas/Filter" } }
    ]);
    assert!(fmt()
        .format_parameters(&params)
        .contains("| filter | query | Filter | No |  |"));
}

#[test]
fn test_object_schema() {
    let schema = json!({
        "type": "object",
        "required": ["id", "name"],
        "properties": {
            "id": { "type": "string", "description": "User ID" },
            "name": { "type": "string", "description": "User name" },
            "email": { "type": "string", "description": "User email" }
        }
    });
    let out = fmt().format_schema(&schema);
    assert!(out.starts_with("**Type**: object\n\n**Properties**:\n"));
    assert!(out.contains("| Name | Type | Required | Description |\n|------|------|----------|-------------|"));
    assert!(out.contains("| id | string | Yes | User ID |"));
    assert!(out.contains("| name | string | Yes | User name |"));
    assert!(out.contains("| email | string | No | User email |"));
}

#[test]
fn test_ref_schema_ignores_siblings() {
    let schema = json!({
        "$ref": "#/components/schemas/User",
        "type": "object",
        "properties": { "id": { "type": "string" } }
    });
    let out = fmt().format_schema(&schema);
    assert_eq!(out, "**Schema**: `User`\n");
}

#[test]
fn test_array_types() {
    let schema = json!({
        "type": "object",
        "properties": {
            "tags": { "type": "array", "items": { "type": "string" } },
            "matrix": { "type": "array", "items": { "type": "array", "items": { "type": "integer" } } },
            "users": { "type": "array", "items": { "$ref": "#/components/schemas/User" } },
            "loose": { "type": "array" },
            "blob": { "description": "untyped" }
        }
    });
    let out = fmt().format_schema(&schema);
    assert!(out.contains("| tags | array[string] | No |  |"));
    assert!(out.contains("| matrix | array[array[integer]] | No |  |"));
    assert!(out.contains("| users | array[User] | No |  |"));
    assert!(out.contains("| loose | array | No |  |"));
    assert!(out.contains("| blob | object | No | untyped |"));
}

#[test]
fn test_schema_without_type() {
    let out = fmt().format_schema(&json!({ "properties": { "name": { "type": "string" } } }));
    assert!(!out.contains("**Type**"));
    assert!(out.contains("**Properties**:"));
}

#[test]
fn test_required_name_not_in_properties_is_ignored() {
    let schema = json!({
        "type": "object",
        "required": ["ghost"],
        "properties": { "id": { "type": "string" } }
    });
    let out = fmt().format_schema(&schema);
    assert!(out.contains("| id | string | No |  |"));
    assert!(!out.contains("ghost"));
}

#[test]
fn test_absent_schema_is_empty() {
    assert_eq!(fmt().format_schema(&Value::Null), "");
}

#[test]
fn test_request_body() {
    let body = json!({
        "description": "User to create",
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/UserInput" },
                "example": { "name": "Ada", "email": "ada@example.com" }
            },
            "application/xml": { "schema": { "type": "object" } }
        }
    });
    let out = fmt().format_request_body(&body);
    assert!(out.starts_with("**Request Body**:\n\nUser to create\n\n**Content-Type**: `application/json`"));
    assert!(out.contains("**Schema**: `UserInput`"));
    assert!(out.contains(
        "**Example**:\n\n```json\n{\n  \"name\": \"Ada\",\n  \"email\": \"ada@example.com\"\n}\n```"
    ));
    assert!(out.contains("**Content-Type**: `application/xml`"));
    let json_pos = out.find("application/json").unwrap();
    let xml_pos = out.find("application/xml").unwrap();
    assert!(json_pos < xml_pos);
}

#[test]
fn test_responses_known_codes() {
    let responses = json!({
        "200": {
            "description": "Success",
            "content": { "application/json": { "schema": { "type": "object" } } }
        },
        "201": { "description": "Created" },
        "204": { "description": "Empty" },
        "400": { "description": "Bad" },
        "401": { "description": "Auth" },
        "403": { "description": "Nope" },
        "404": { "description": "Not found" },
        "500": { "description": "Boom" }
    });
    let out = fmt().format_responses(&responses);
    for heading in [
        "#### 200 OK",
        "#### 201 Created",
        "#### 204 No Content",
        "#### 400 Bad Request",
        "#### 401 Unauthorized",
        "#### 403 Forbidden",
        "#### 404 Not Found",
        "#### 500 Internal Server Error",
    ] {
        assert!(out.contains(heading), "missing {heading}");
    }
    assert!(out.contains("**Schema**:\n\n```json\n{\n  \"type\": \"object\"\n}\n```"));
}

#[test]
fn test_responses_preserve_order_and_unknown_codes() {
    let responses = json!({
        "404": { "description": "Not found" },
        "418": { "description": "I'm a teapot" },
        "200": { "description": "Success" }
    });
    let out = fmt().format_responses(&responses);
    assert!(out.contains("#### 418\n\nI'm a teapot"));
    let a = out.find("#### 404").unwrap();
    let b = out.find("#### 418").unwrap();
    let c = out.find("#### 200").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_response_example_block() {
    let responses = json!({
        "200": {
            "content": { "application/json": { "example": [{ "id": 1 }] } }
        }
    });
    let out = fmt().format_responses(&responses);
    assert!(!out.contains("**Schema**"));
    assert!(out.contains("**Example**:\n\n```json\n[\n  {\n    \"id\": 1\n  }\n]\n```"));
}

#[test]
fn test_table_cells_are_escaped() {
    let params = json!([
        { "name": "q", "in": "query", "description": "a | b\nsecond line" }
    ]);
    let out = fmt().format_parameters(&params);
    assert!(out.contains("| q | query | N/A | No | a \\| b second line |"));
}

#[test]
fn test_extract_type() {
    assert_eq!(extract_type(None), "N/A");
    assert_eq!(extract_type(Some(&Value::Null)), "N/A");
    assert_eq!(extract_type(Some(&json!({}))), "object");
    assert_eq!(extract_type(Some(&json!({ "type": "integer" }))), "integer");
    assert_eq!(
        extract_type(Some(&json!({ "$ref": "#/components/schemas/Pet", "type": "string" }))),
        "Pet"
    );
}

#[test]
fn test_status_name() {
    assert_eq!(status_name("200"), "OK");
    assert_eq!(status_name("418"), "");
}
