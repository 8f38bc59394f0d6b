use std::sync::Arc;

use http_cors_rs::{AllowCredentials, Cors, CorsOptions, MaxAge};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let options = CorsOptions {
        allow_origin: "http://api.example.com".into(),
        allow_credentials: Some(AllowCredentials::True),
        allow_method: Some("GET, POST, OPTIONS".into()),
        allow_headers: Some("content-type, x-requested-with, x-demo-trace".into()),
        expose_headers: Some("x-demo-trace".into()),
        max_age: Some(MaxAge::Seconds(600)),
    };

    AppState {
        cors: Arc::new(Cors::new(options)),
        greeting: "Welcome to the Actix Web CORS demo!",
    }
}

pub mod middleware;
