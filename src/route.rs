//! Shareable request routes.
//!
//! The current request is mirrored into the browser path so it can be
//! bookmarked or shared:
//!
//! ```text
//! /rest-client/<METHOD>/<base64 url>[/<base64 body>]?<header>=<value>&...
//! ```
//!
//! URL and body are Base64-encoded and then percent-encoded, so `/`, `+` and
//! `=` from the Base64 alphabet never split or corrupt a path segment. Active
//! headers travel as form-urlencoded query pairs.

use crate::encoding::{decode_base64, encode_base64};
use crate::models::{Header, HttpMethod, RequestData};
use log::debug;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use url::{form_urlencoded, Url};

/// First path segment of every request route.
pub const ROUTE_PREFIX: &str = "rest-client";

/// Builds the route for a request.
///
/// Returns `None` when the URL is blank, since there is nothing worth sharing.
/// The body segment is only present when the body is non-blank.
///
/// # Examples
///
/// ```
/// use rest_client_core::models::RequestData;
/// use rest_client_core::route::encode_route;
///
/// let request = RequestData::new("GET", "https://api.example.com");
/// assert_eq!(
///     encode_route(&request).unwrap(),
///     "/rest-client/GET/aHR0cHM6Ly9hcGkuZXhhbXBsZS5jb20%3D"
/// );
/// ```
pub fn encode_route(request: &RequestData) -> Option<String> {
    if request.url.trim().is_empty() {
        return None;
    }

    let mut path = format!(
        "/{}/{}/{}",
        ROUTE_PREFIX,
        encode_segment(&request.method),
        encode_segment(&encode_base64(&request.url))
    );
    if !request.body.trim().is_empty() {
        path.push('/');
        path.push_str(&encode_segment(&encode_base64(&request.body)));
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    for header in request.active_headers() {
        query.append_pair(&header.key, &header.value);
    }
    let query = query.finish();

    if query.is_empty() {
        Some(path)
    } else {
        Some(format!("{}?{}", path, query))
    }
}

/// Rebuilds a request from its route.
///
/// Accepts a path with optional query, or a full URL. Never fails: a path
/// that is not a request route, or that names an unknown method, yields
/// [`RequestData::default`]. Missing or undecodable URL and body segments
/// become empty strings. Query pairs become enabled headers numbered from
/// `"1"`; with no query a single blank header row is returned.
pub fn decode_route(route: &str) -> RequestData {
    let (path, query) = split_route(route);
    let parts = path_parts(&path);

    if parts.len() < 2 || parts[0] != ROUTE_PREFIX {
        debug!("not a request route: {}", route);
        return RequestData::default();
    }

    let method = match HttpMethod::parse(&decode_segment(parts[1])) {
        Some(method) => method,
        None => {
            debug!("unknown method in route: {}", parts[1]);
            return RequestData::default();
        }
    };

    let url = parts
        .get(2)
        .map(|s| decode_base64(&decode_segment(s)))
        .unwrap_or_default();
    let body = parts
        .get(3)
        .map(|s| decode_base64(&decode_segment(s)))
        .unwrap_or_default();

    let mut headers: Vec<Header> = form_urlencoded::parse(query.as_bytes())
        .enumerate()
        .map(|(i, (key, value))| Header::with_id((i + 1).to_string(), key, value))
        .collect();
    if headers.is_empty() {
        headers.push(Header::blank("1"));
    }

    RequestData {
        method: method.as_str().to_string(),
        url,
        headers,
        body,
    }
}

/// Page title for a route, e.g. `"POST Request - REST Client"`.
///
/// Without a method segment the title reads `"REST Request - REST Client"`.
pub fn route_title(route: &str) -> String {
    let (path, _) = split_route(route);
    let parts = path_parts(&path);

    let method = match parts.as_slice() {
        [prefix, method, ..] if *prefix == ROUTE_PREFIX => decode_segment(method).to_uppercase(),
        _ => "REST".to_string(),
    };

    format!("{} Request - REST Client", method)
}

/// Splits a route or full URL into its path and query.
fn split_route(route: &str) -> (String, String) {
    if let Ok(url) = Url::parse(route) {
        return (url.path().to_string(), url.query().unwrap_or("").to_string());
    }

    match route.split_once('?') {
        Some((path, query)) => (path.to_string(), query.to_string()),
        None => (route.to_string(), String::new()),
    }
}

fn path_parts(path: &str) -> Vec<&str> {
    path.split('/').filter(|p| !p.is_empty()).collect()
}

fn encode_segment(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            debug!("route segment is not valid UTF-8: {}", e);
            String::new()
        }
    }
}
