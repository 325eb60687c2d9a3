use axum::{extract::State, http::StatusCode, response::Html, Form};
use campus_notify_core::{AlertError, NotificationRecord};
use serde::Deserialize;
use tracing::info;

use crate::templates::{render, Flash, SendTemplate};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct SendForm {
    pub alert_type: Option<String>,
    pub message: Option<String>,
}

pub async fn send_form() -> AppResult<Html<String>> {
    render(&SendTemplate::new(None, None))
}

pub async fn send_submit(
    State(state): State<AppState>,
    Form(form): Form<SendForm>,
) -> AppResult<(StatusCode, Html<String>)> {
    let message = form.message.unwrap_or_default();
    if message.trim().is_empty() {
        let page = SendTemplate::new(Some(Flash::danger("Please enter a message")), None);
        return Ok((StatusCode::BAD_REQUEST, render(&page)?));
    }
    let alert_type = form.alert_type.unwrap_or_default();

    let separator = "=".repeat(50);
    state.sink.emit("");
    state.sink.emit(&separator);
    state.sink.emit("📨 NEW NOTIFICATION");
    state.sink.emit(&format!("Type: {}", alert_type));
    state.sink.emit(&format!("Message: {}", message));
    state.sink.emit(&separator);

    let outcome = state
        .registry
        .construct(&alert_type, message.clone(), state.sink.clone())
        .and_then(|mut alert| alert.send().map(|result| (alert.kind(), result)));

    let (status, page) = match outcome {
        Ok((kind, result)) => {
            state
                .history
                .push(NotificationRecord::now(kind, message, result.clone()));
            info!(alert_type = %kind, total = state.history.len(), "Notification recorded");
            let flash = Flash::success(format!("{} Notification sent successfully!", kind.icon()));
            (StatusCode::OK, SendTemplate::new(Some(flash), Some(result)))
        }
        Err(AlertError::UnsupportedKind(_)) => (
            StatusCode::BAD_REQUEST,
            SendTemplate::new(Some(Flash::danger("Invalid alert type")), None),
        ),
        Err(e) => {
            let text = format!("Error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SendTemplate::new(Some(Flash::danger(text.clone())), Some(text)),
            )
        }
    };

    Ok((status, render(&page)?))
}
