use axum::{extract::State, Json};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "campus-notify-web",
        "version": env!("CARGO_PKG_VERSION"),
        "history_len": state.history.len(),
        "registered_types": state.registry.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
