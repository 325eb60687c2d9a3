use thiserror::Error;

/// Rejections raised by the validated fields and the priority parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid priority: {0}. Must be one of: LOW, MEDIUM, HIGH, URGENT")]
    InvalidPriority(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlertError {
    #[error("Unsupported alert type: {0}")]
    UnsupportedKind(String),

    #[error("Alert message cannot be empty")]
    EmptyMessage,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[derive(Error, Debug)]
pub enum RetryError<E: std::error::Error + 'static> {
    #[error("Failed after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        last: E,
    },

    #[error("max_retries must be at least 1")]
    NoAttempts,
}
