//! Data models for variables and requests.
//!
//! These are the in-memory shapes handed to the core by the surrounding
//! application: the variable list and the request form fields.

pub mod request;
pub mod variable;

pub use request::{Header, HttpMethod, RequestData};
pub use variable::{Variable, VariablePreview};
