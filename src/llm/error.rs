//! Inference error types

use thiserror::Error;

/// Inference error with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::RateLimit, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::ServerError, message)
    }

    pub fn model_loading(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::ModelLoading, message)
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Auth, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::InvalidRequest, message)
    }

    pub fn unknown_model(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::UnknownModel, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Unknown, message)
    }
}

/// Error classification. Nothing in this crate retries; the class is
/// logged so transient failures can be told apart from configuration
/// mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Network issues, timeouts - transient
    Network,
    /// Rate limited (429) - transient
    RateLimit,
    /// Remote server error (5xx) - transient
    ServerError,
    /// Hosted model is cold and still warming up (503 with estimate) - transient
    ModelLoading,
    /// Authentication failed (401, 403) - not transient
    Auth,
    /// Bad request (400, 422) - not transient
    InvalidRequest,
    /// Model id not present in the catalog
    UnknownModel,
    /// Unknown error
    Unknown,
}

impl LlmErrorKind {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network | Self::RateLimit | Self::ServerError | Self::ModelLoading
        )
    }
}
