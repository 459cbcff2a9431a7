//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Stack errors ──────────────────────────────────────────────────────────────

/// Errors raised while constructing or registering a stack.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("Invalid stack name '{0}': must match ^[A-Za-z][A-Za-z0-9-]{{0,127}}$")]
    InvalidName(String),

    #[error("There is already a stack named '{0}' in this app.")]
    DuplicateStack(String),
}
