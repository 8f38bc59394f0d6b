use crate::constants::WILDCARD;

/// Configuration for the CORS responder.
///
/// Every field maps to exactly one `access-control-*` response header. The
/// default configuration allows any origin and leaves the remaining headers
/// unset, which makes preflight responses echo what the request announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOptions {
    pub allow_origin: String,
    pub allow_credentials: Option<AllowCredentials>,
    pub allow_method: Option<String>,
    pub allow_headers: Option<String>,
    pub expose_headers: Option<String>,
    pub max_age: Option<MaxAge>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            allow_origin: WILDCARD.into(),
            allow_credentials: None,
            allow_method: None,
            allow_headers: None,
            expose_headers: None,
            max_age: None,
        }
    }
}

/// Value of the `access-control-allow-credentials` header.
///
/// The boolean form follows header truthiness, only `True` produces the
/// header. The string form is emitted verbatim unless it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCredentials {
    True,
    False,
    Value(String),
}

impl AllowCredentials {
    pub(crate) fn header_value(&self) -> Option<String> {
        match self {
            Self::True => Some("true".into()),
            Self::False => None,
            Self::Value(value) if value.is_empty() => None,
            Self::Value(value) => Some(value.clone()),
        }
    }
}

impl From<bool> for AllowCredentials {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<&str> for AllowCredentials {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for AllowCredentials {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

/// Value of the `access-control-max-age` header.
///
/// Being set is what matters, a zero duration still emits `max-age: 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaxAge {
    Seconds(u64),
    Value(String),
}

impl MaxAge {
    pub(crate) fn header_value(&self) -> String {
        match self {
            Self::Seconds(seconds) => seconds.to_string(),
            Self::Value(value) => value.clone(),
        }
    }
}

impl From<u64> for MaxAge {
    fn from(seconds: u64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for MaxAge {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for MaxAge {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
