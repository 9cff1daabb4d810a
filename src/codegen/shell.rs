//! cURL command generator.
//!
//! Renders a request as a multi-line `curl` command with backslash
//! continuations: method first, one `-H` per header, the body as a
//! single-quoted `-d` argument, and the URL last.

use super::literal::{shell_double_quoted, shell_single_quoted};
use super::Snippet;

/// Generates a cURL command for the request.
pub fn generate_curl_command(snippet: &Snippet<'_>) -> String {
    let mut parts = vec![format!("curl -X {}", snippet.method)];

    for (key, value) in &snippet.headers {
        parts.push(format!("-H {}", shell_double_quoted(&format!("{}: {}", key, value))));
    }

    if let Some(body) = snippet.body {
        parts.push(format!("-d {}", shell_single_quoted(body)));
    }

    // URL is always last
    parts.push(shell_double_quoted(snippet.url));

    format_multiline(&parts)
}

/// Joins command parts with backslash line continuations.
fn format_multiline(parts: &[String]) -> String {
    parts.join(" \\\n  ")
}
