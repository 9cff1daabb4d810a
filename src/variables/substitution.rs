//! Variable substitution engine
//!
//! This module owns the placeholder grammar and replaces `{{variable}}` patterns
//! in request text with values from a caller-supplied variable list. Substitution
//! is purely textual: one scan over the input, no recursion into substituted
//! values, and unknown placeholders are left exactly as written.

use crate::models::{Header, RequestData, Variable};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};

/// Cached regex pattern for matching {{variableName}} with optional whitespace.
///
/// The name token is any run of non-`}` characters and is not validated.
static VARIABLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([^}]+)\s*\}\}").expect("Failed to compile variable regex"));

/// Returns true if `text` contains at least one `{{...}}` placeholder.
///
/// # Examples
///
/// ```
/// use rest_client_core::variables::has_variables;
///
/// assert!(has_variables("GET {{ baseUrl }}/users"));
/// assert!(!has_variables("GET https://example.com"));
/// ```
pub fn has_variables(text: &str) -> bool {
    VARIABLE_REGEX.is_match(text)
}

/// Lists the placeholder names used in `text`.
///
/// Names are trimmed of the whitespace around them inside the markers but are
/// otherwise returned verbatim. Duplicates are removed, keeping the order of
/// first occurrence.
///
/// # Examples
///
/// ```
/// use rest_client_core::variables::find_variables_in_text;
///
/// let names = find_variables_in_text("Hi {{ name }} and {{name}}, from {{ city }}");
/// assert_eq!(names, vec!["name", "city"]);
/// ```
pub fn find_variables_in_text(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for cap in VARIABLE_REGEX.captures_iter(text) {
        let name = cap.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if seen.insert(name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Substitutes `{{name}}` placeholders with the values of matching variables.
///
/// Only variables that are enabled and have a non-empty name and value take
/// part. When several usable variables share a name, the first one in list
/// order supplies the value. The text is scanned once: substituted values are
/// inserted literally and never re-scanned, so a value containing `{{other}}`
/// stays as written. Placeholders without a usable variable are left verbatim.
///
/// # Arguments
///
/// * `text` - The input text containing {{variable}} patterns
/// * `variables` - The variable list, in the order the user arranged it
///
/// # Examples
///
/// ```
/// use rest_client_core::models::Variable;
/// use rest_client_core::variables::replace_variables;
///
/// let variables = vec![
///     Variable::new("x", "1"),
///     Variable::new("y", "2").with_enabled(false),
/// ];
/// assert_eq!(replace_variables("{{x}} {{y}}", &variables), "1 {{y}}");
/// ```
pub fn replace_variables(text: &str, variables: &[Variable]) -> String {
    // Fast path: if there are no variable markers at all, return original text
    if !text.contains("{{") {
        return text.to_string();
    }

    let usable = usable_variables(variables);
    if usable.is_empty() {
        return text.to_string();
    }

    let re = match build_name_regex(&usable) {
        Ok(re) => re,
        Err(e) => {
            debug!(
                "variable pattern could not be compiled, resolving by name lookup: {}",
                e
            );
            return replace_by_lookup(text, &usable);
        }
    };

    let mut substitutions = 0usize;
    let result = re.replace_all(text, |caps: &Captures<'_>| {
        // Group i + 1 belongs to usable[i]; exactly one group participates.
        match (0..usable.len()).find(|i| caps.get(i + 1).is_some()) {
            Some(index) => {
                substitutions += 1;
                usable[index].value.clone()
            }
            None => caps[0].to_string(),
        }
    });

    trace!("substituted {} placeholder(s)", substitutions);
    result.into_owned()
}

/// Lists the placeholder names that remain after substitution.
///
/// This is what the preview uses to warn that some variables are undefined or
/// disabled.
pub fn unresolved_variables(text: &str, variables: &[Variable]) -> Vec<String> {
    find_variables_in_text(&replace_variables(text, variables))
}

/// Resolves every variable-bearing field of a request.
///
/// The URL, each header key and value, and the body go through
/// [`replace_variables`]. Header ids and enabled flags are kept, and the method
/// is copied as is.
pub fn resolve_request(request: &RequestData, variables: &[Variable]) -> RequestData {
    RequestData {
        method: request.method.clone(),
        url: replace_variables(&request.url, variables),
        headers: request
            .headers
            .iter()
            .map(|h| Header {
                id: h.id.clone(),
                key: replace_variables(&h.key, variables),
                value: replace_variables(&h.value, variables),
                enabled: h.enabled,
            })
            .collect(),
        body: replace_variables(&request.body, variables),
    }
}

/// Usable variables with duplicate names removed, first occurrence kept.
fn usable_variables(variables: &[Variable]) -> Vec<&Variable> {
    let mut seen = HashSet::new();
    variables
        .iter()
        .filter(|v| v.is_usable())
        .filter(|v| seen.insert(v.name.as_str()))
        .collect()
}

/// Builds `\{\{\s*(?:(n0)|(n1)|...)\s*\}\}` with each name regex-escaped.
fn build_name_regex(usable: &[&Variable]) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = usable
        .iter()
        .map(|v| format!("({})", regex::escape(&v.name)))
        .collect();

    Regex::new(&format!(r"\{{\{{\s*(?:{})\s*\}}\}}", alternatives.join("|")))
}

/// Substitutes placeholders without a compiled name pattern.
///
/// Used when the alternation of all names is too large for the regex engine.
/// Scans left to right for `{{`, skips whitespace, and looks the token up to
/// the next `}}` (trailing whitespace trimmed) in a first-wins name map. A
/// miss advances by one character, so `{{{x}}` still resolves the inner
/// placeholder the way the compiled pattern does.
fn replace_by_lookup(text: &str, usable: &[&Variable]) -> String {
    let values: HashMap<&str, &str> = usable
        .iter()
        .map(|v| (v.name.as_str(), v.value.as_str()))
        .collect();

    let mut result = String::with_capacity(text.len());
    let mut substitutions = 0usize;
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let inner = &rest[start + 2..];
        let name_start = inner.len() - inner.trim_start().len();

        let resolved = inner[name_start..].find("}}").and_then(|close| {
            let name = inner[name_start..name_start + close].trim_end();
            values
                .get(name)
                .map(|value| (*value, start + 2 + name_start + close + 2))
        });

        match resolved {
            Some((value, end)) => {
                result.push_str(&rest[..start]);
                result.push_str(value);
                rest = &rest[end..];
                substitutions += 1;
            }
            None => {
                // Keep the first brace and retry from the next one.
                result.push_str(&rest[..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }
    result.push_str(rest);

    trace!("substituted {} placeholder(s) by lookup", substitutions);
    result
}
