use crate::constants::{field, method};
use crate::request::Request;

/// How a request relates to the origin serving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    SameOrigin,
    CrossOrigin,
    Preflight,
}

/// A request is cross-origin when it carries an `origin` header, whatever
/// the header's value.
pub fn is_cross_origin_request(request: &Request) -> bool {
    request.headers().contains(field::ORIGIN)
}

/// A preflight is a cross-origin `OPTIONS` request that announces both the
/// method and the headers of the request it precedes. The method comparison
/// is exact, so a lowercase `options` does not qualify.
pub fn is_preflight_request(request: &Request) -> bool {
    is_cross_origin_request(request)
        && request.method() == method::OPTIONS
        && request
            .headers()
            .contains(field::ACCESS_CONTROL_REQUEST_METHOD)
        && request
            .headers()
            .contains(field::ACCESS_CONTROL_REQUEST_HEADERS)
}

pub fn classify(request: &Request) -> RequestKind {
    if is_preflight_request(request) {
        RequestKind::Preflight
    } else if is_cross_origin_request(request) {
        RequestKind::CrossOrigin
    } else {
        RequestKind::SameOrigin
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
