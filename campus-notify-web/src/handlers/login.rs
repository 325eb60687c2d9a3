use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::info;

use super::home::home_page;
use crate::templates::{render, Flash, LoginTemplate};
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub async fn login_form() -> AppResult<Html<String>> {
    render(&LoginTemplate { flash: None })
}

/// Checks the credentials and greets the user. No session is created, so
/// later requests are unaffected.
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    match state.users.authenticate(&username, &password) {
        Ok(user) => {
            info!(username = %user.username, "Login accepted");
            let flash = Flash::success(format!("Welcome {}!", user.display_name));
            Ok(home_page(&state, Some(flash))?.into_response())
        }
        Err(e) => {
            let page = render(&LoginTemplate {
                flash: Some(Flash::danger(e.to_string())),
            })?;
            Ok((StatusCode::UNAUTHORIZED, page).into_response())
        }
    }
}
