//! Integration tests module for the REST client core
//!
//! This module provides shared fixtures for the workflow tests.

pub mod end_to_end_test;

use rest_client_core::models::{RequestData, Variable};

/// Variables a typical user keeps for one API.
pub fn api_variables() -> Vec<Variable> {
    vec![
        Variable::new("baseUrl", "https://api.example.com").with_description("API root"),
        Variable::new("token", "abc123"),
        Variable::new("userId", "42"),
        Variable::new("legacyToken", "old").with_enabled(false),
    ]
}

/// A templated JSON POST as it would be typed in the request form.
pub fn templated_post() -> RequestData {
    let mut request = RequestData::new("POST", "{{baseUrl}}/users/{{userId}}/notes");
    request.add_header("Authorization", "Bearer {{token}}");
    request.add_header("Content-Type", "application/json");
    request.set_body(r#"{"owner":"{{ userId }}","text":"hello"}"#);
    request
}
