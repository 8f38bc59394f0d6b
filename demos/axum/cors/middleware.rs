use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use http_cors_rs::constants::field;
use http_cors_rs::{
    Headers, Request as CorsRequest, RequestKind, Response as CorsResponse, classify, with_cors,
    with_preflight,
};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors_request = cors_request(&request);

    match classify(&cors_request) {
        RequestKind::SameOrigin => next.run(request).await,
        RequestKind::CrossOrigin => {
            let mut response = next.run(request).await;
            let decorated = with_cors(
                &cors_request,
                &cors_response(&response),
                state.cors.options(),
            );
            write_headers(response.headers_mut(), decorated.headers());
            response
        }
        RequestKind::Preflight => {
            let response = next.run(request).await;
            let reply = with_preflight(
                &cors_request,
                &cors_response(&response),
                state.cors.options(),
            );
            preflight_reply(reply)
        }
    }
}

fn preflight_reply(reply: CorsResponse) -> Response {
    let status = StatusCode::from_u16(reply.status()).unwrap_or(StatusCode::NO_CONTENT);
    let mut response = Response::builder()
        .status(status)
        .body(Body::empty())
        .unwrap();

    write_headers(response.headers_mut(), reply.headers());
    response
}

fn write_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            map.insert(header_name, header_value);
        }
    }
}

fn cors_request(request: &Request) -> CorsRequest {
    let mut builder = CorsRequest::builder()
        .method(request.method().as_str())
        .uri(request.uri().path());

    for name in [
        field::ORIGIN,
        field::ACCESS_CONTROL_REQUEST_METHOD,
        field::ACCESS_CONTROL_REQUEST_HEADERS,
    ] {
        if let Some(value) = header_value(request.headers(), name) {
            builder = builder.header(name, value);
        }
    }

    builder.build()
}

fn cors_response(response: &Response) -> CorsResponse {
    let mut builder = CorsResponse::builder().status(response.status().as_u16());

    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            builder = builder.header(name.as_str(), value);
        }
    }

    builder.build()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
