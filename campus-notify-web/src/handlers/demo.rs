use axum::{extract::State, response::Html};
use campus_notify_core::run_demonstrations;

use crate::templates::{render, DemoTemplate};
use crate::{AppResult, AppState};

pub async fn demo_poo(State(state): State<AppState>) -> AppResult<Html<String>> {
    let results = run_demonstrations(&state.registry, state.sink.clone());
    render(&DemoTemplate { results })
}
