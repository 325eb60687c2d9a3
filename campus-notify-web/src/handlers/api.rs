//! JSON variant of the send form. Only a subset of kinds is exposed and
//! nothing is written to history.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use campus_notify_core::AlertKind;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppError, AppResult, AppState};

const API_KINDS: [AlertKind; 2] = [AlertKind::Security, AlertKind::Weather];

#[derive(Debug, Deserialize)]
pub struct ApiSendRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSendResponse {
    pub status: String,
    pub result: String,
    pub timestamp: String,
}

pub async fn api_send(
    State(state): State<AppState>,
    payload: Result<Json<ApiSendRequest>, JsonRejection>,
) -> AppResult<Json<ApiSendResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let (tag, message) = match (request.kind, request.message) {
        (Some(tag), Some(message)) if !tag.is_empty() && !message.trim().is_empty() => {
            (tag, message)
        }
        _ => return Err(AppError::bad_request("Type and message required")),
    };

    let kind = API_KINDS
        .into_iter()
        .find(|kind| kind.tag() == tag)
        .ok_or_else(|| AppError::bad_request("Unsupported type"))?;

    let mut alert = state
        .registry
        .construct(kind.tag(), message, state.sink.clone())?;
    let result = alert.send()?;
    info!(alert_type = %kind, "API notification sent");

    Ok(Json(ApiSendResponse {
        status: "success".to_string(),
        result,
        timestamp: chrono::Local::now().to_rfc3339(),
    }))
}
