//! String literal rendering shared by every code generator.
//!
//! Each generator picks the helper matching the quoting style of its target
//! language so that quotes, backslashes and newlines in URLs, headers and
//! bodies never break the generated snippet.

use serde_json::Value;

/// Renders `s` as a double-quoted JSON string literal.
///
/// The escapes JSON produces (`\"`, `\\`, `\n`, `\uXXXX`, ...) are also valid
/// in JavaScript, Python, Java, C# and Go string literals, so every embedded
/// request body goes through this function.
pub fn json_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

/// Renders `s` as a single-quoted JavaScript or Python string literal.
pub fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Wraps `s` in single quotes for a POSIX shell.
///
/// Nothing is special inside single quotes except the quote itself, which is
/// closed, escaped and reopened as `'\''`.
pub fn shell_single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Wraps `s` in double quotes for a POSIX shell, escaping `\ " $` and backticks.
pub fn shell_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
