//! Core logic for a browser-based REST testing tool.
//!
//! This crate holds everything the tool does besides drawing widgets and
//! sending requests: user-defined `{{name}}` variables, request code
//! generation for several languages, and the helpers that let a request be
//! shared as a URL.
//!
//! # Architecture
//!
//! - **models**: Request, header and variable records
//! - **variables**: `{{variable}}` detection, substitution, previews and the
//!   saved JSON form of a variable list
//! - **codegen**: Source snippets (cURL, Fetch, XHR, Node.js, Python, Java,
//!   C#, Go) that reproduce a request
//! - **encoding**: UTF-8 safe Base64 for URLs and bodies
//! - **formatter**: JSON pretty-printing for request and response bodies
//! - **route**: Encodes a request into a shareable path and back
//! - **config**: Settings loaded from a JSON settings document
//!
//! # Usage
//!
//! ```
//! use rest_client_core::models::{RequestData, Variable};
//! use rest_client_core::variables::resolve_request;
//! use rest_client_core::generate_code;
//!
//! let variables = vec![Variable::new("baseUrl", "https://api.example.com")];
//!
//! let mut request = RequestData::new("GET", "{{baseUrl}}/users");
//! request.add_header("Accept", "application/json");
//!
//! let resolved = resolve_request(&request, &variables);
//! let code = generate_code(&resolved, "curl");
//! assert!(code.starts_with("curl -X GET"));
//! assert!(code.contains("\"https://api.example.com/users\""));
//! ```

pub mod codegen;
pub mod config;
pub mod encoding;
pub mod formatter;
pub mod models;
pub mod route;
pub mod variables;

pub use codegen::{generate_code, try_generate_code, CodeGenError, Language};
pub use config::{load_config, CoreConfig};
pub use encoding::{decode_base64, encode_base64};
pub use formatter::{prettify_json, FormatError};
pub use models::{Header, HttpMethod, RequestData, Variable, VariablePreview};
pub use route::{decode_route, encode_route, route_title};
pub use variables::{
    find_variables_in_text, get_variable_preview, has_variables, replace_variables,
    resolve_request,
};
