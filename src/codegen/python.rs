//! Python code generation for HTTP requests.
//!
//! Generates code for the `requests` library. Methods with a dedicated
//! helper (`requests.get`, `requests.post`, ...) use it; anything else goes
//! through `requests.request`.

use super::literal::{json_string, single_quoted};
use super::Snippet;

/// Verbs that have a module-level helper in `requests`.
const REQUESTS_HELPERS: [&str; 7] = ["get", "post", "put", "patch", "delete", "head", "options"];

/// Generates Python code using the requests library.
pub fn generate_requests_code(snippet: &Snippet<'_>) -> String {
    let mut code = String::new();

    code.push_str("import requests\n\n");

    if snippet.headers.is_empty() {
        code.push_str("headers = {}\n\n");
    } else {
        let entries: Vec<String> = snippet
            .headers
            .iter()
            .map(|(key, value)| format!("    {}: {}", single_quoted(key), single_quoted(value)))
            .collect();
        code.push_str(&format!("headers = {{\n{}\n}}\n\n", entries.join(",\n")));
    }

    let verb = snippet.method.to_lowercase();
    let mut args = Vec::new();
    let call = if REQUESTS_HELPERS.contains(&verb.as_str()) {
        format!("requests.{}", verb)
    } else {
        args.push(single_quoted(snippet.method));
        "requests.request".to_string()
    };
    args.push(single_quoted(snippet.url));
    args.push("headers=headers".to_string());
    if let Some(body) = snippet.body {
        args.push(format!("data={}", json_string(body)));
    }

    code.push_str("try:\n");
    code.push_str(&format!(
        "    response = {}(\n        {}\n    )\n",
        call,
        args.join(",\n        ")
    ));
    code.push_str("    response.raise_for_status()\n\n");
    code.push_str("    print(f\"Status Code: {response.status_code}\")\n");
    code.push_str("    print(f\"Response: {response.text}\")\n\n");
    code.push_str("except requests.exceptions.RequestException as e:\n");
    code.push_str("    print(f\"Error: {e}\")");

    code
}
