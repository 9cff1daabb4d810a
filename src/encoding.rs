//! Base64 helpers for embedding request text in URLs.
//!
//! Text is encoded as standard-alphabet Base64 over its UTF-8 bytes, so
//! multi-byte characters survive the round trip. Decoding is forgiving in the
//! way browsers' `atob` is: ASCII whitespace is ignored, padding is optional
//! and trailing bits are accepted.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use log::debug;

/// Decoder matching the leniency of `atob`.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes UTF-8 text as padded standard Base64.
///
/// # Examples
///
/// ```
/// use rest_client_core::encoding::encode_base64;
///
/// assert_eq!(encode_base64("Hello World!"), "SGVsbG8gV29ybGQh");
/// ```
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes Base64 back into UTF-8 text.
///
/// Never fails: malformed Base64 or bytes that are not valid UTF-8 yield an
/// empty string.
///
/// # Examples
///
/// ```
/// use rest_client_core::encoding::decode_base64;
///
/// assert_eq!(decode_base64("SGVsbG8gV29ybGQh"), "Hello World!");
/// assert_eq!(decode_base64("%%%"), "");
/// ```
pub fn decode_base64(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !is_ascii_whitespace(*c)).collect();

    let bytes = match FORGIVING.decode(compact.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("invalid base64 input: {}", e);
            return String::new();
        }
    };

    String::from_utf8(bytes).unwrap_or_else(|e| {
        debug!("decoded base64 is not valid UTF-8: {}", e);
        String::new()
    })
}

/// The whitespace set `atob` strips before decoding.
fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{0C}')
}
