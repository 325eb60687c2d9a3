use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Json,
};
use campus_notify_core::AlertError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::templates::{render, NotFoundTemplate};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{0}")]
    Delivery(#[from] AlertError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Delivery(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every API failure.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub async fn handle_404(uri: Uri) -> Response {
    warn!(path = %uri.path(), "No route");
    let page = NotFoundTemplate {
        path: uri.path().to_string(),
    };
    match render(&page) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, Html("<h1>404 - Page not found</h1>")).into_response(),
    }
}

pub async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let trace_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(
        trace_id = %trace_id,
        method = %method,
        uri = %uri,
        "Request started"
    );

    let response = next.run(request).await;

    tracing::info!(
        trace_id = %trace_id,
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("Unsupported type").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(AlertError::EmptyMessage).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_the_error_text() {
        let error = AppError::bad_request("Type and message required");
        assert_eq!(error.to_string(), "Type and message required");
    }
}
