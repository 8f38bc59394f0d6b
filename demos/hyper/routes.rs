use http_cors_rs::constants::{field, method};
use http_cors_rs::{Request, Response};

use crate::cors::AppState;

pub fn respond(state: &AppState, request: &Request) -> Response {
    match (request.method(), request.uri()) {
        (method::GET, "/hello") => hello(state),
        _ => not_found(),
    }
}

fn hello(state: &AppState) -> Response {
    let body = format!(
        "<h1>{}</h1><p>The router and the middleware share one request model.</p>",
        state.greeting
    );

    Response::builder()
        .header(field::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(body)
        .build()
}

fn not_found() -> Response {
    Response::builder().status(404).body("Not Found").build()
}
