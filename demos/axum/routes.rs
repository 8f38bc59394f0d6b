use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::cors::AppState;

pub async fn hello(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from another origin to watch the headers change.</p>",
        state.greeting
    ))
}
