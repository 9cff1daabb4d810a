//! End-to-end integration tests for the REST client core
//!
//! These tests follow a request through the whole workflow: variables are
//! saved and restored, the request is shared as a route, rebuilt from it,
//! resolved, and turned into code.

use super::{api_variables, templated_post};
use rest_client_core::config::load_config;
use rest_client_core::formatter::prettify_json;
use rest_client_core::models::Header;
use rest_client_core::route::{decode_route, encode_route, route_title};
use rest_client_core::variables::{
    get_variable_preview, resolve_request, unresolved_variables, variables_from_json,
    variables_to_json,
};
use rest_client_core::{generate_code, Language};
use serde_json::json;

#[test]
fn test_end_to_end_route_resolve_generate() {
    // Step 1: Share the templated request as a route
    let request = templated_post();
    let route = encode_route(&request).expect("non-empty URL must produce a route");
    assert!(route.starts_with("/rest-client/POST/"));
    assert_eq!(route_title(&route), "POST Request - REST Client");

    // Step 2: Open the route elsewhere; placeholders travel unresolved
    let restored = decode_route(&format!("https://app.example.com{}", route));
    assert_eq!(restored.url, "{{baseUrl}}/users/{{userId}}/notes");
    assert_eq!(restored.body, request.body);
    assert_eq!(restored.headers[0], Header::with_id("1", "Authorization", "Bearer {{token}}"));

    // Step 3: Restore the saved variables and resolve
    let variables = variables_from_json(&variables_to_json(&api_variables()));
    let resolved = resolve_request(&restored, &variables);
    assert_eq!(resolved.url, "https://api.example.com/users/42/notes");
    assert_eq!(resolved.body, r#"{"owner":"42","text":"hello"}"#);

    // Step 4: Generate code
    let code = generate_code(&resolved, "python");
    assert!(code.contains("requests.post("));
    assert!(code.contains("'https://api.example.com/users/42/notes'"));
    assert!(code.contains("'Authorization': 'Bearer abc123'"));
    assert!(code.contains(r#"data="{\"owner\":\"42\",\"text\":\"hello\"}""#));
}

#[test]
fn test_end_to_end_default_language_from_config() {
    let settings = json!({
        "rest-client": {
            "defaultLanguage": "go",
            "previewMaxLength": 24
        }
    });
    let config = load_config(Some(settings)).unwrap();
    assert_eq!(config.language(), Language::Go);

    let resolved = resolve_request(&templated_post(), &api_variables());
    let code = generate_code(&resolved, &config.default_language);
    assert!(code.starts_with("package main"));
    assert!(code.contains("\t\"strings\"\n"));

    let preview = get_variable_preview(
        &templated_post().url,
        &api_variables(),
        Some(config.preview_max_length),
    );
    assert_eq!(preview.resolved, "https://api.example.com/...");
    assert!(preview.has_variables);
}

#[test]
fn test_end_to_end_unresolved_placeholders_survive() {
    let mut request = templated_post();
    request.add_header("X-Legacy", "{{legacyToken}}");

    let variables = api_variables();
    assert_eq!(
        unresolved_variables(&request.headers[2].value, &variables),
        vec!["legacyToken"]
    );

    let resolved = resolve_request(&request, &variables);
    let code = generate_code(&resolved, "curl");
    assert!(code.contains("-H \"X-Legacy: {{legacyToken}}\""));
}

#[test]
fn test_end_to_end_body_prettified_before_sharing() {
    let mut request = templated_post();
    request.set_body(prettify_json(&request.body));
    assert!(request.body.contains("\n  \"owner\": \"{{ userId }}\""));

    let restored = decode_route(&encode_route(&request).unwrap());
    assert_eq!(restored.body, request.body);

    let resolved = resolve_request(&restored, &api_variables());
    let code = generate_code(&resolved, "fetch");
    assert!(code.contains(r#"body: "{\n  \"owner\": \"42\",\n  \"text\": \"hello\"\n}""#));
}

#[test]
fn test_end_to_end_empty_request() {
    let request = rest_client_core::models::RequestData::default();
    assert_eq!(encode_route(&request), None);

    for language in Language::all() {
        assert_eq!(
            generate_code(&request, language.id()),
            format!("// Please enter a URL to generate {} code", language.id())
        );
    }
}
