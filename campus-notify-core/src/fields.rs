//! Validated fields and the demo entity that uses them.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::ValidationError;
use crate::priority::Priority;
use crate::wrappers::InstanceTracker;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

static USER_NOTIFICATIONS: InstanceTracker = InstanceTracker::new();

/// An address of the form `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if EMAIL_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::InvalidEmail(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Empty input means "no email"; anything else must be well formed.
fn optional_email(value: &str) -> Result<Option<Email>, ValidationError> {
    if value.is_empty() {
        Ok(None)
    } else {
        Email::parse(value).map(Some)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserNotification {
    message: String,
    priority: Priority,
    email: Option<Email>,
}

impl UserNotification {
    pub const TYPE_NAME: &'static str = "UserNotification";

    pub fn new(
        message: impl Into<String>,
        priority: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        let notification = Self {
            message: message.into(),
            priority: priority.parse()?,
            email: optional_email(email)?,
        };
        USER_NOTIFICATIONS.track(Self::TYPE_NAME);
        Ok(notification)
    }

    pub fn with_defaults(message: impl Into<String>) -> Self {
        USER_NOTIFICATIONS.track(Self::TYPE_NAME);
        Self {
            message: message.into(),
            priority: Priority::default(),
            email: None,
        }
    }

    /// Number of instances built since process start.
    pub fn instances() -> usize {
        USER_NOTIFICATIONS.count()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// On rejection the previous priority is kept.
    pub fn set_priority(&mut self, value: &str) -> Result<(), ValidationError> {
        self.priority = value.parse()?;
        Ok(())
    }

    /// On rejection the previous email is kept. An empty value clears it.
    pub fn set_email(&mut self, value: &str) -> Result<(), ValidationError> {
        self.email = optional_email(value)?;
        Ok(())
    }
}

impl fmt::Display for UserNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let email = self.email.as_ref().map(Email::as_str).unwrap_or("");
        write!(f, "{}: {} (email: {})", self.priority, self.message, email)
    }
}
