//! Failure taxonomy for text generation calls.

use std::time::Duration;
use thiserror::Error;

/// Errors from a text generation request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LlmError {
    /// The provider throttled the request (HTTP 429).
    #[error("rate limited by provider")]
    RateLimited { retry_after: Option<Duration> },

    /// Timeout, dropped connection or server-side failure.
    #[error("transient failure: {0}")]
    Transient(String),

    /// The provider rejected the request itself.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Credential missing, revoked or lacking access.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Response arrived but carried no usable text.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Transient(_))
    }

    /// Server-provided wait hint, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}
