use http_cors_rs::constants::{field, method};
use http_cors_rs::{AllowCredentials, Cors, CorsOptions, MaxAge, Request, Response};
use std::convert::Infallible;

#[derive(Default)]
pub struct CorsBuilder {
    allow_origin: Option<String>,
    allow_credentials: Option<AllowCredentials>,
    allow_method: Option<String>,
    allow_headers: Option<String>,
    expose_headers: Option<String>,
    max_age: Option<MaxAge>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allow_origin = Some(origin.into());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(AllowCredentials::from(enabled));
        self
    }

    pub fn credentials_value(mut self, value: impl Into<String>) -> Self {
        self.allow_credentials = Some(AllowCredentials::Value(value.into()));
        self
    }

    pub fn allow_method(mut self, value: impl Into<String>) -> Self {
        self.allow_method = Some(value.into());
        self
    }

    pub fn allow_headers(mut self, value: impl Into<String>) -> Self {
        self.allow_headers = Some(value.into());
        self
    }

    pub fn expose_headers(mut self, value: impl Into<String>) -> Self {
        self.expose_headers = Some(value.into());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(MaxAge::Seconds(seconds));
        self
    }

    pub fn max_age_value(mut self, value: impl Into<String>) -> Self {
        self.max_age = Some(MaxAge::Value(value.into()));
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();

        CorsOptions {
            allow_origin: self.allow_origin.unwrap_or(defaults.allow_origin),
            allow_credentials: self.allow_credentials,
            allow_method: self.allow_method,
            allow_headers: self.allow_headers,
            expose_headers: self.expose_headers,
            max_age: self.max_age,
        }
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options())
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn build(self) -> Request {
        let mut request = Request::builder()
            .method(self.method)
            .uri("http://localhost/");
        if let Some(origin) = self.origin {
            request = request.header(field::ORIGIN, origin);
        }
        request.build()
    }

    pub fn respond(self, cors: &Cors) -> Response {
        respond(cors, self.build())
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn build(self) -> Request {
        let mut request = Request::builder()
            .method(method::OPTIONS)
            .uri("http://localhost/");
        if let Some(origin) = self.origin {
            request = request.header(field::ORIGIN, origin);
        }
        if let Some(method) = self.request_method {
            request = request.header(field::ACCESS_CONTROL_REQUEST_METHOD, method);
        }
        if let Some(headers) = self.request_headers {
            request = request.header(field::ACCESS_CONTROL_REQUEST_HEADERS, headers);
        }
        request.build()
    }

    pub fn respond(self, cors: &Cors) -> Response {
        respond(cors, self.build())
    }
}

/// Downstream response every `respond` helper hands back: `200 ok` with a
/// `content-type`.
pub fn ok_response() -> Response {
    Response::builder()
        .header(field::CONTENT_TYPE, "text/plain")
        .body("ok")
        .build()
}

/// Runs `request` through the middleware with the canned `ok` continuation.
pub fn respond(cors: &Cors, request: Request) -> Response {
    respond_with(cors, request, ok_response())
}

/// Runs `request` through the middleware with a fixed downstream response.
pub fn respond_with(cors: &Cors, request: Request, downstream: Response) -> Response {
    cors.handle(request, move |_| Ok::<_, Infallible>(downstream))
        .expect("continuation is infallible")
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
