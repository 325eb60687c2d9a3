use axum::{extract::State, response::Html};

use crate::templates::{render, DashboardTemplate};
use crate::{AppResult, AppState};

pub async fn dashboard(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&DashboardTemplate {
        stats: state.history.stats(),
        resolution_order: state.notifier.resolution_order(),
        notifications: state.history.recent(state.config.dashboard_limit),
    })
}
