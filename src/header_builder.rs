use crate::constants::{WILDCARD, field};
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::request::Request;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build_allow_origin(&self) -> Headers {
        let mut headers = Headers::with_capacity(2);
        headers.set(
            field::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.options.allow_origin.clone(),
        );
        // Caches must key on the request origin once the response stops
        // being origin-independent.
        if self.options.allow_origin != WILDCARD {
            headers.append_distinct(field::VARY, field::ORIGIN);
        }
        headers
    }

    pub(crate) fn build_credentials(&self) -> Headers {
        if let Some(credentials) = &self.options.allow_credentials
            && let Some(value) = credentials.header_value()
        {
            let mut headers = Headers::with_capacity(1);
            headers.set(field::ACCESS_CONTROL_ALLOW_CREDENTIALS, value);
            return headers;
        }
        Headers::new()
    }

    pub(crate) fn build_preflight_methods(&self, request: &Request) -> Headers {
        let value = match &self.options.allow_method {
            Some(value) => value.clone(),
            None => request
                .headers()
                .get(field::ACCESS_CONTROL_REQUEST_METHOD)
                .unwrap_or_default()
                .to_string(),
        };

        let mut headers = Headers::with_capacity(1);
        headers.set(field::ACCESS_CONTROL_ALLOW_METHODS, value);
        headers
    }

    pub(crate) fn build_preflight_headers(&self, request: &Request) -> Headers {
        let value = match &self.options.allow_headers {
            Some(value) => value.clone(),
            None => request
                .headers()
                .get(field::ACCESS_CONTROL_REQUEST_HEADERS)
                .unwrap_or_default()
                .to_string(),
        };

        let mut headers = Headers::with_capacity(1);
        headers.set(field::ACCESS_CONTROL_ALLOW_HEADERS, value);
        headers
    }

    pub(crate) fn build_expose_headers(&self) -> Headers {
        if let Some(value) = &self.options.expose_headers
            && !value.is_empty()
        {
            let mut headers = Headers::with_capacity(1);
            headers.set(field::ACCESS_CONTROL_EXPOSE_HEADERS, value.clone());
            return headers;
        }
        Headers::new()
    }

    pub(crate) fn build_max_age(&self) -> Headers {
        if let Some(max_age) = &self.options.max_age {
            let mut headers = Headers::with_capacity(1);
            headers.set(field::ACCESS_CONTROL_MAX_AGE, max_age.header_value());
            return headers;
        }
        Headers::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
