//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User API error: {0}")]
    Api(String),

    #[error("Location lookup failed: {0}")]
    Location(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Field-level failure produced by the registration validator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("is required")]
    Required,

    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    #[error("is not a valid address")]
    InvalidFormat,

    #[error("does not match")]
    Mismatch,
}

/// Outcome of a native share attempt that did not complete.
///
/// `Unsupported` means the platform has no share sheet; the caller falls back to
/// the clipboard. Every other variant comes from a present capability and is
/// swallowed by the article view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("native share is not available")]
    Unsupported,

    #[error("share was aborted")]
    Aborted,

    #[error("share failed: {0}")]
    Failed(String),
}
