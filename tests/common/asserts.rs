use http_cors_rs::constants::field;
use http_cors_rs::{Headers, Response};
use std::collections::HashSet;

use super::headers::vary_values;

/// The middleware must not have touched the downstream response at all.
pub fn assert_identity(result: &Response, downstream: &Response) {
    assert_eq!(result.status(), downstream.status());
    assert_eq!(result.body(), downstream.body());
    assert_eq!(result.headers(), downstream.headers());
}

/// Shape every preflight reply must have: bodyless `204` without content
/// metadata.
pub fn assert_preflight_reply(response: &Response) {
    assert_eq!(response.status(), 204);
    assert!(response.body().is_empty());
    assert!(!response.headers().contains(field::CONTENT_TYPE));
    assert!(!response.headers().contains(field::CONTENT_LENGTH));
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        headers.get(name),
        Some(expected),
        "unexpected value for {name}",
    );
}

pub fn assert_vary_eq<'a>(headers: &Headers, expected: impl IntoIterator<Item = &'a str>) {
    let expected: HashSet<String> = expected
        .into_iter()
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(vary_values(headers), expected);
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        vary_values(headers).is_empty(),
        "vary should carry no entries",
    );
}
