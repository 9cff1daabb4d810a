//! Variables module
//!
//! This module provides `{{variable}}` detection, substitution and preview for
//! request text, plus the JSON form in which variable lists are saved.

pub mod preview;
pub mod snapshot;
pub mod substitution;

pub use preview::{get_variable_preview, DEFAULT_PREVIEW_LENGTH};
pub use snapshot::{variables_from_json, variables_to_json};
pub use substitution::{
    find_variables_in_text, has_variables, replace_variables, resolve_request,
    unresolved_variables,
};
