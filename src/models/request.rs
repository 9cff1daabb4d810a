//! HTTP request data models.
//!
//! This module defines the request shape shared by the resolver, the code
//! generator and the route codec: the method, URL, header rows and raw body
//! as they are edited in the request form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// HTTP request method.
///
/// The closed set of methods offered by the request form. `RequestData`
/// itself keeps the method as a plain string; this enum is used where a
/// method has to be recognized, such as route decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP PUT method - replace a resource
    PUT,
    /// HTTP PATCH method - partially modify a resource
    PATCH,
    /// HTTP DELETE method - remove a resource
    DELETE,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
    /// HTTP OPTIONS method - describe communication options
    OPTIONS,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }

    /// Returns all methods in the order the request form lists them.
    pub fn all() -> [HttpMethod; 7] {
        [
            HttpMethod::GET,
            HttpMethod::POST,
            HttpMethod::PUT,
            HttpMethod::PATCH,
            HttpMethod::DELETE,
            HttpMethod::HEAD,
            HttpMethod::OPTIONS,
        ]
    }

    /// Parses a method name, ignoring case.
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string names a known method, `None` otherwise.
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.to_uppercase();
        Self::all().into_iter().find(|m| m.as_str() == upper)
    }

    /// Whether a request body is sent with this method.
    pub fn accepts_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT | HttpMethod::PATCH)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single header row of the request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Opaque row identifier, stable for the lifetime of the row.
    pub id: String,
    /// Header name.
    pub key: String,
    /// Header value. May contain `{{variable}}` placeholders before resolution.
    pub value: String,
    /// Disabled rows are kept in the form but never sent.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Header {
    /// Creates an enabled header with a freshly generated id.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates an enabled header with an explicit id.
    pub fn with_id(
        id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// An empty enabled row, as shown in a fresh request form.
    pub fn blank(id: impl Into<String>) -> Self {
        Self::with_id(id, "", "")
    }

    /// Whether this header takes part in code generation and route encoding.
    ///
    /// A header is active when it is enabled and both its key and value are
    /// non-blank after trimming.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.key.trim().is_empty() && !self.value.trim().is_empty()
    }
}

/// A request as edited in the request form.
///
/// `method` is kept as a string and compared case-sensitively against the
/// uppercase body-carrying verbs; no other invariant is enforced on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestData {
    /// HTTP verb, normally uppercase.
    pub method: String,
    /// Target URL. May contain `{{variable}}` placeholders before resolution.
    pub url: String,
    /// Header rows in form order.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Raw request body.
    #[serde(default)]
    pub body: String,
}

impl RequestData {
    /// Creates a request with no headers and an empty body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Appends an enabled header row.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header::new(key, value));
    }

    /// Sets the request body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Headers that are enabled and have a non-blank key and value.
    pub fn active_headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter().filter(|h| h.is_active())
    }

    /// The texts that reach a snippet or route: URL, active header keys and
    /// values, and the body.
    pub fn output_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.url.as_str()];
        for header in self.active_headers() {
            fields.push(header.key.as_str());
            fields.push(header.value.as_str());
        }
        fields.push(self.body.as_str());
        fields
    }

    /// Whether the method carries a body.
    ///
    /// Only the exact tokens `POST`, `PUT` and `PATCH` qualify; the
    /// comparison is case-sensitive.
    pub fn accepts_body(&self) -> bool {
        matches!(self.method.as_str(), "POST" | "PUT" | "PATCH")
    }

    /// The body to send, if the method carries one and it is non-empty.
    pub fn body_for_send(&self) -> Option<&str> {
        if self.accepts_body() && !self.body.is_empty() {
            Some(self.body.as_str())
        } else {
            None
        }
    }
}

impl Default for RequestData {
    /// A fresh request form: `GET`, no URL, one blank header row.
    fn default() -> Self {
        Self {
            method: HttpMethod::GET.as_str().to_string(),
            url: String::new(),
            headers: vec![Header::blank("1")],
            body: String::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
