use axum::{extract::State, response::Html};

use crate::templates::{render, Flash, IndexTemplate};
use crate::{AppResult, AppState};

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    home_page(&state, None)
}

/// Home page, optionally topped by a flash message.
pub(crate) fn home_page(state: &AppState, flash: Option<Flash>) -> AppResult<Html<String>> {
    render(&IndexTemplate {
        flash,
        notifications: state.history.recent(state.config.recent_limit),
        total: state.history.len(),
    })
}
