use crate::body::Body;
use crate::constants::field;
use crate::headers::Headers;

/// Outbound HTTP response.
///
/// Treated as an immutable template: the responders copy it and return a new
/// value instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Headers,
    body: Body,
}

impl Response {
    /// A 200 response carrying `body` and no headers.
    pub fn new(body: impl Into<Body>) -> Self {
        Self {
            status: 200,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// A reply that carries no payload. `content-type` and `content-length`
    /// are dropped from `headers`, a bodyless response must not declare
    /// content metadata.
    pub fn bodyless(status: u16, mut headers: Headers) -> Self {
        headers.remove(field::CONTENT_TYPE);
        headers.remove(field::CONTENT_LENGTH);
        Self {
            status,
            headers,
            body: Body::empty(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Copy of this response with `headers` swapped in; status and body are
    /// carried over as-is.
    pub fn with_headers(&self, headers: Headers) -> Self {
        Self {
            status: self.status,
            headers,
            body: self.body.clone(),
        }
    }
}

pub struct ResponseBuilder {
    status: u16,
    headers: Headers,
    body: Body,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self {
            status: 200,
            headers: Headers::new(),
            body: Body::empty(),
        }
    }
}

impl ResponseBuilder {
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Adds a header with append semantics; repeating a field name
    /// comma-joins the values.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replaces the whole header collection.
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
