use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/send", get(handlers::send_form).post(handlers::send_submit))
        .route("/dashboard", get(handlers::dashboard))
        .route("/demo-poo", get(handlers::demo_poo))
        .route("/login", get(handlers::login_form).post(handlers::login_submit))
}

pub fn api_routes() -> Router<AppState> {
    Router::new().route("/send", post(handlers::api_send))
}
