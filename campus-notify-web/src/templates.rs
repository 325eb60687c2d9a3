use askama::Template;
use axum::response::Html;
use campus_notify_core::{AlertKind, DemoResult, HistoryStats, NotificationRecord};

use crate::error_handling::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Danger => "danger",
        }
    }
}

/// One-shot message shown at the top of a page.
#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flash: Option<Flash>,
    pub notifications: Vec<NotificationRecord>,
    pub total: usize,
}

#[derive(Template)]
#[template(path = "send.html")]
pub struct SendTemplate {
    pub flash: Option<Flash>,
    pub kinds: Vec<AlertKind>,
    pub result: Option<String>,
}

impl SendTemplate {
    pub fn new(flash: Option<Flash>, result: Option<String>) -> Self {
        Self {
            flash,
            kinds: AlertKind::ALL.to_vec(),
            result,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub stats: HistoryStats,
    pub resolution_order: Vec<&'static str>,
    pub notifications: Vec<NotificationRecord>,
}

#[derive(Template)]
#[template(path = "demo_poo.html")]
pub struct DemoTemplate {
    pub results: Vec<DemoResult>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub flash: Option<Flash>,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}
