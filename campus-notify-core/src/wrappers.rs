//! Observational wrappers composed around an operation.
//!
//! None of these alter the wrapped value: they log around the call and hand
//! the result back untouched.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::RetryError;
use crate::priority::Priority;

/// Log the invocation of `name` with `args`, then its outcome.
///
/// Errors are logged and returned unchanged.
pub fn logged<A, T, E, F>(name: &str, args: &A, op: F) -> Result<T, E>
where
    A: Debug + ?Sized,
    T: Debug,
    E: std::fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    info!(operation = name, args = ?args, "Notification call");
    match op() {
        Ok(value) => {
            info!(operation = name, result = ?value, "Notification call succeeded");
            Ok(value)
        }
        Err(e) => {
            error!(operation = name, error = %e, "Notification call failed");
            Err(e)
        }
    }
}

/// A declared priority attached to an operation as metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityTag {
    level: Priority,
}

impl PriorityTag {
    pub const fn new(level: Priority) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Priority {
        self.level
    }

    pub fn call<T, F: FnOnce() -> T>(&self, op: F) -> T {
        info!(level = %self.level, "Priority level");
        op()
    }
}

/// Run `op` up to `max_retries` times, sleeping `delay` between failures.
pub fn retry<T, E, F>(max_retries: u32, delay: Duration, mut op: F) -> Result<T, RetryError<E>>
where
    E: std::error::Error + 'static,
    F: FnMut() -> Result<T, E>,
{
    if max_retries == 0 {
        return Err(RetryError::NoAttempts);
    }

    let mut attempt = 1;
    loop {
        info!(attempt, max_retries, "Retry attempt");
        match op() {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(attempt, error = %e, "Attempt failed");
                if attempt >= max_retries {
                    return Err(RetryError::Exhausted {
                        attempts: attempt,
                        last: e,
                    });
                }
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                attempt += 1;
            }
        }
    }
}

/// Counts how many instances of a type have been built.
#[derive(Debug, Default)]
pub struct InstanceTracker {
    count: AtomicUsize,
}

impl InstanceTracker {
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Record a new instance and return its 1-based ordinal.
    pub fn track(&self, type_name: &str) -> usize {
        let ordinal = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(type_name, ordinal, "Instance created");
        ordinal
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
