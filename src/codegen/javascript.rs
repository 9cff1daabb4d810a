//! JavaScript code generation for HTTP requests.
//!
//! This module provides code generators for the browser `fetch()` API, the
//! browser `XMLHttpRequest` object and the Node.js `http`/`https` modules.

use super::literal::{json_string, single_quoted};
use super::Snippet;

/// Generates JavaScript code using the browser fetch() API.
pub fn generate_fetch_code(snippet: &Snippet<'_>) -> String {
    let mut options = vec![format!("  method: {}", single_quoted(snippet.method))];

    if !snippet.headers.is_empty() {
        options.push(format!("  headers: {{\n{}\n  }}", header_entries(snippet, "    ")));
    }

    if let Some(body) = snippet.body {
        options.push(format!("  body: {}", json_string(body)));
    }

    let mut code = String::new();
    code.push_str(&format!(
        "fetch({}, {{\n{}\n}})\n",
        single_quoted(snippet.url),
        options.join(",\n")
    ));
    code.push_str("  .then(response => response.json())\n");
    code.push_str("  .then(data => console.log(data))\n");
    code.push_str("  .catch(error => console.error('Error:', error));");

    code
}

/// Generates JavaScript code using XMLHttpRequest.
pub fn generate_xhr_code(snippet: &Snippet<'_>) -> String {
    let mut code = String::new();

    code.push_str("const xhr = new XMLHttpRequest();\n");
    code.push_str(&format!(
        "xhr.open({}, {});\n",
        single_quoted(snippet.method),
        single_quoted(snippet.url)
    ));
    for (key, value) in &snippet.headers {
        code.push_str(&format!(
            "xhr.setRequestHeader({}, {});\n",
            single_quoted(key),
            single_quoted(value)
        ));
    }

    code.push_str("\nxhr.onreadystatechange = function() {\n");
    code.push_str("  if (xhr.readyState === 4) {\n");
    code.push_str("    if (xhr.status === 200) {\n");
    code.push_str("      console.log(xhr.responseText);\n");
    code.push_str("    } else {\n");
    code.push_str("      console.error('Request failed:', xhr.statusText);\n");
    code.push_str("    }\n");
    code.push_str("  }\n");
    code.push_str("};\n\n");

    match snippet.body {
        Some(body) => code.push_str(&format!("xhr.send({});", json_string(body))),
        None => code.push_str("xhr.send();"),
    }

    code
}

/// Generates Node.js code using the `http` or `https` module.
///
/// The module follows the URL scheme: `https://` URLs use `https`, anything
/// else uses `http`.
pub fn generate_nodejs_code(snippet: &Snippet<'_>) -> String {
    let protocol = if snippet.url.starts_with("https://") {
        "https"
    } else {
        "http"
    };

    let mut options = vec![format!("  method: {}", single_quoted(snippet.method))];
    if !snippet.headers.is_empty() {
        options.push(format!("  headers: {{\n{}\n  }}", header_entries(snippet, "    ")));
    }

    let mut code = String::new();
    code.push_str(&format!("const {0} = require('{0}');\n\n", protocol));
    code.push_str(&format!("const options = {{\n{}\n}};\n\n", options.join(",\n")));

    code.push_str(&format!(
        "const req = {}.request({}, options, (res) => {{\n",
        protocol,
        single_quoted(snippet.url)
    ));
    code.push_str("  let data = '';\n\n");
    code.push_str("  res.on('data', (chunk) => {\n");
    code.push_str("    data += chunk;\n");
    code.push_str("  });\n\n");
    code.push_str("  res.on('end', () => {\n");
    code.push_str("    console.log('Status:', res.statusCode);\n");
    code.push_str("    console.log('Response:', data);\n");
    code.push_str("  });\n");
    code.push_str("});\n\n");

    code.push_str("req.on('error', (error) => {\n");
    code.push_str("  console.error('Error:', error);\n");
    code.push_str("});\n\n");

    if let Some(body) = snippet.body {
        code.push_str(&format!("req.write({});\n", json_string(body)));
    }
    code.push_str("req.end();");

    code
}

/// Renders headers as `'key': 'value'` object entries, one per line.
fn header_entries(snippet: &Snippet<'_>, indent: &str) -> String {
    snippet
        .headers
        .iter()
        .map(|(key, value)| format!("{}{}: {}", indent, single_quoted(key), single_quoted(value)))
        .collect::<Vec<_>>()
        .join(",\n")
}
