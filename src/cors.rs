use crate::classify::{RequestKind, classify, is_cross_origin_request, is_preflight_request};
use crate::constants::field;
use crate::header_builder::HeaderBuilder;
use crate::headers::merge_headers;
use crate::options::CorsOptions;
use crate::request::Request;
use crate::response::Response;

/// Decorates a cross-origin response with the configured CORS headers.
///
/// Returns the response unchanged when the request is same-origin or its
/// `origin` value is empty. Status and body always survive.
pub fn with_cors(request: &Request, response: &Response, options: &CorsOptions) -> Response {
    let origin = request.headers().get(field::ORIGIN).unwrap_or_default();

    if !is_cross_origin_request(request) || origin.is_empty() {
        return response.clone();
    }

    let builder = HeaderBuilder::new(options);
    let mut cors_headers = builder.build_allow_origin();
    cors_headers.extend(builder.build_credentials());

    let headers = merge_headers(response.headers(), cors_headers);

    response.with_headers(headers)
}

/// Replaces a preflight response with a bodyless `204` carrying the
/// negotiated CORS headers.
///
/// Returns the response unchanged when the request is not a preflight. The
/// downstream status and body are discarded; its non-content headers are
/// merged into the reply.
pub fn with_preflight(request: &Request, response: &Response, options: &CorsOptions) -> Response {
    if !is_preflight_request(request) {
        return response.clone();
    }

    let builder = HeaderBuilder::new(options);
    let mut cors_headers = builder.build_allow_origin();
    cors_headers.extend(builder.build_preflight_methods(request));
    cors_headers.extend(builder.build_preflight_headers(request));
    cors_headers.extend(builder.build_credentials());
    cors_headers.extend(builder.build_expose_headers());
    cors_headers.extend(builder.build_max_age());

    let headers = merge_headers(response.headers(), cors_headers);

    Response::bodyless(204, headers)
}

/// CORS middleware over plain request/response values.
#[derive(Debug, Default)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Handles one request by calling the continuation exactly once and then
    /// rewriting its response according to the request's classification.
    ///
    /// The continuation receives its own copy of the request, so inspecting
    /// the original here never competes with downstream reads. Continuation
    /// errors propagate untouched.
    pub fn handle<F, E>(&self, request: Request, next: F) -> Result<Response, E>
    where
        F: FnOnce(Request) -> Result<Response, E>,
    {
        let response = next(request.clone())?;

        Ok(match classify(&request) {
            RequestKind::SameOrigin => response,
            RequestKind::CrossOrigin => with_cors(&request, &response, &self.options),
            RequestKind::Preflight => with_preflight(&request, &response, &self.options),
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
