//! Code generation module for HTTP requests.
//!
//! This module turns a resolved [`RequestData`] into a ready-to-paste snippet
//! in one of eight target languages. Each language is a variant of the closed
//! [`Language`] set and maps to one render function; adding a language means
//! adding a variant and its renderer.
//!
//! Variables must be resolved by the caller before generation (see
//! [`crate::variables::resolve_request`]).

pub mod csharp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod literal;
pub mod python;
pub mod shell;

use crate::models::RequestData;
use log::debug;
use std::fmt;

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Shell command using cURL
    Curl,
    /// Browser fetch() API
    Fetch,
    /// Browser XMLHttpRequest
    Xhr,
    /// Node.js http/https modules
    NodeJs,
    /// Python requests library
    Python,
    /// Java 11+ HttpClient
    Java,
    /// C# HttpClient
    CSharp,
    /// Go net/http
    Go,
}

/// Render function for one language.
type Renderer = fn(&Snippet<'_>) -> String;

impl Language {
    /// Returns all languages in picker order.
    pub fn all() -> [Language; 8] {
        [
            Language::Curl,
            Language::Fetch,
            Language::Xhr,
            Language::NodeJs,
            Language::Python,
            Language::Java,
            Language::CSharp,
            Language::Go,
        ]
    }

    /// Returns the identifier used to select this language.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Curl => "curl",
            Language::Fetch => "fetch",
            Language::Xhr => "xhr",
            Language::NodeJs => "nodejs",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Go => "go",
        }
    }

    /// Returns the human-readable label shown in the language picker.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Curl => "cURL",
            Language::Fetch => "JavaScript (Fetch)",
            Language::Xhr => "JavaScript (XHR)",
            Language::NodeJs => "Node.js",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Go => "Go",
        }
    }

    /// Looks up a language by its identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Language> {
        Self::all().into_iter().find(|lang| lang.id() == id)
    }

    fn renderer(&self) -> Renderer {
        match self {
            Language::Curl => shell::generate_curl_command,
            Language::Fetch => javascript::generate_fetch_code,
            Language::Xhr => javascript::generate_xhr_code,
            Language::NodeJs => javascript::generate_nodejs_code,
            Language::Python => python::generate_requests_code,
            Language::Java => java::generate_java_code,
            Language::CSharp => csharp::generate_csharp_code,
            Language::Go => go::generate_go_code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The parts of a request every renderer needs, computed once per call.
#[derive(Debug)]
pub struct Snippet<'a> {
    /// HTTP verb as given.
    pub method: &'a str,
    /// Target URL.
    pub url: &'a str,
    /// Active headers as `(key, value)` pairs, in form order.
    pub headers: Vec<(&'a str, &'a str)>,
    /// Body to embed, present only for body-carrying methods with a non-empty body.
    pub body: Option<&'a str>,
}

impl<'a> Snippet<'a> {
    /// Projects a request onto the fields renderers use.
    pub fn from_request(request: &'a RequestData) -> Self {
        Self {
            method: &request.method,
            url: &request.url,
            headers: request
                .active_headers()
                .map(|h| (h.key.as_str(), h.value.as_str()))
                .collect(),
            body: request.body_for_send(),
        }
    }
}

/// Errors that can occur during code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeGenError {
    /// The requested language is not supported
    UnsupportedLanguage(String),
    /// The request is missing required fields
    InvalidRequest(String),
}

impl fmt::Display for CodeGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeGenError::UnsupportedLanguage(lang) => {
                write!(f, "Language '{}' is not supported", lang)
            }
            CodeGenError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for CodeGenError {}

/// Generates a snippet, reporting why generation was not possible.
///
/// # Returns
///
/// The generated code, or:
/// - `CodeGenError::InvalidRequest` if the URL is blank
/// - `CodeGenError::UnsupportedLanguage` if `language` is not a known id
pub fn try_generate_code(request: &RequestData, language: &str) -> Result<String, CodeGenError> {
    if request.url.trim().is_empty() {
        return Err(CodeGenError::InvalidRequest(
            "Request URL is empty".to_string(),
        ));
    }

    let lang = Language::from_id(language)
        .ok_or_else(|| CodeGenError::UnsupportedLanguage(language.to_string()))?;

    let snippet = Snippet::from_request(request);
    Ok((lang.renderer())(&snippet))
}

/// Generates a snippet for `language`, never failing.
///
/// A blank URL or an unknown language yields a one-line comment explaining
/// why no code was produced, so the result is always displayable.
///
/// # Examples
///
/// ```
/// use rest_client_core::codegen::generate_code;
/// use rest_client_core::models::RequestData;
///
/// let mut request = RequestData::new("POST", "https://api.example.com");
/// request.add_header("Content-Type", "application/json");
/// request.set_body(r#"{"foo":"bar"}"#);
///
/// let code = generate_code(&request, "curl");
/// assert!(code.contains("curl -X POST"));
/// assert!(code.contains(r#"-d '{"foo":"bar"}'"#));
///
/// let code = generate_code(&request, "ruby");
/// assert!(code.contains("not implemented"));
/// ```
pub fn generate_code(request: &RequestData, language: &str) -> String {
    match try_generate_code(request, language) {
        Ok(code) => code,
        Err(CodeGenError::InvalidRequest(reason)) => {
            debug!("no {} code generated: {}", language, reason);
            format!("// Please enter a URL to generate {} code", language)
        }
        Err(CodeGenError::UnsupportedLanguage(_)) => {
            debug!("no code generator for language '{}'", language);
            format!("// Code generation for {} not implemented yet", language)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Header;

    fn post_request() -> RequestData {
        let mut request = RequestData::new("POST", "https://api.example.com");
        request.add_header("Content-Type", "application/json");
        request.set_body(r#"{"foo":"bar"}"#);
        request
    }

    #[test]
    fn test_language_ids_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_id(lang.id()), Some(lang));
        }
    }

    #[test]
    fn test_language_from_id_is_exact() {
        assert_eq!(Language::from_id("curl"), Some(Language::Curl));
        assert_eq!(Language::from_id("CURL"), None);
        assert_eq!(Language::from_id("ruby"), None);
        assert_eq!(Language::from_id(""), None);
    }

    #[test]
    fn test_language_labels() {
        assert_eq!(Language::Curl.label(), "cURL");
        assert_eq!(Language::Fetch.label(), "JavaScript (Fetch)");
        assert_eq!(Language::CSharp.label(), "C#");
        assert_eq!(format!("{}", Language::NodeJs), "Node.js");
    }

    #[test]
    fn test_generate_code_empty_url() {
        let request = RequestData::new("GET", "");
        let code = generate_code(&request, "curl");
        assert_eq!(code, "// Please enter a URL to generate curl code");
    }

    #[test]
    fn test_generate_code_blank_url() {
        let request = RequestData::new("GET", "   ");
        assert!(generate_code(&request, "go").contains("Please enter a URL"));
    }

    #[test]
    fn test_url_checked_before_language() {
        let request = RequestData::new("GET", "");
        assert!(generate_code(&request, "ruby").contains("Please enter a URL"));
    }

    #[test]
    fn test_generate_code_unknown_language() {
        let request = RequestData::new("GET", "https://api.example.com");
        let code = generate_code(&request, "unknown-lang");
        assert_eq!(code, "// Code generation for unknown-lang not implemented yet");
    }

    #[test]
    fn test_generate_code_curl_post() {
        let code = generate_code(&post_request(), "curl");
        assert!(code.contains("curl -X POST"));
        assert!(code.contains(r#"-H "Content-Type: application/json""#));
        assert!(code.contains(r#"-d '{"foo":"bar"}'"#));
    }

    #[test]
    fn test_every_language_produces_code() {
        let request = post_request();
        for lang in Language::all() {
            let code = generate_code(&request, lang.id());
            assert!(!code.is_empty());
            assert!(!code.starts_with("// "), "{} fell back: {}", lang.id(), code);
            assert!(code.contains("api.example.com"));
        }
    }

    #[test]
    fn test_body_omitted_for_get_and_delete() {
        for method in ["GET", "DELETE", "HEAD", "post"] {
            let mut request = post_request();
            request.method = method.to_string();
            for lang in Language::all() {
                let code = generate_code(&request, lang.id());
                assert!(!code.contains("foo"), "{} {} leaked body", method, lang.id());
            }
        }
    }

    #[test]
    fn test_inactive_headers_omitted() {
        let mut request = post_request();
        let mut disabled = Header::new("X-Disabled", "yes");
        disabled.enabled = false;
        request.headers.push(disabled);
        request.headers.push(Header::new("X-Empty", ""));
        request.headers.push(Header::new("", "orphan"));

        for lang in Language::all() {
            let code = generate_code(&request, lang.id());
            assert!(!code.contains("X-Disabled"));
            assert!(!code.contains("X-Empty"));
            assert!(!code.contains("orphan"));
        }
    }

    #[test]
    fn test_snippet_from_request() {
        let request = post_request();
        let snippet = Snippet::from_request(&request);
        assert_eq!(snippet.method, "POST");
        assert_eq!(snippet.headers, vec![("Content-Type", "application/json")]);
        assert_eq!(snippet.body, Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn test_try_generate_code_errors() {
        let request = RequestData::new("GET", "");
        assert!(matches!(
            try_generate_code(&request, "curl"),
            Err(CodeGenError::InvalidRequest(_))
        ));

        let request = RequestData::new("GET", "https://example.com");
        assert_eq!(
            try_generate_code(&request, "ruby"),
            Err(CodeGenError::UnsupportedLanguage("ruby".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = CodeGenError::UnsupportedLanguage("ruby".to_string());
        assert_eq!(format!("{}", err), "Language 'ruby' is not supported");
    }
}
