use crate::body::Body;
use crate::constants::method;
use crate::headers::Headers;

/// Inbound HTTP request as the middleware sees it.
///
/// The core reads only the method and the headers; the target and body ride
/// along untouched for the downstream continuation. Cloning yields an
/// independently readable copy, so classifying one copy never consumes
/// anything the continuation still needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    uri: String,
    headers: Headers,
    body: Body,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

pub struct RequestBuilder {
    method: String,
    uri: String,
    headers: Headers,
    body: Body,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            method: method::GET.into(),
            uri: "/".into(),
            headers: Headers::new(),
            body: Body::empty(),
        }
    }
}

impl RequestBuilder {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Adds a header with append semantics; repeating a field name
    /// comma-joins the values.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            uri: self.uri,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
