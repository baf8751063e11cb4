//! Error types for the API client

use solarsite_core::{Error as CoreError, ErrorCode};
use std::fmt;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned a non-success status
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Payload parsed but lacks a field we rely on
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Payload parsed but carried no usable data
    #[error("Empty response: {0}")]
    Empty(String),
}

/// Coarse failure classes used by the form controller's notice policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network-level failure (DNS, connect, timeout)
    Transport,
    /// Non-success HTTP status
    Status,
    /// Successful response with nothing in it
    Empty,
    /// Successful response we could not interpret
    Malformed,
    /// Local misconfiguration
    Config,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Empty => "empty",
            Self::Malformed => "malformed",
            Self::Config => "config",
        };
        f.write_str(label)
    }
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed-payload error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create an empty-payload error
    pub fn empty(msg: impl Into<String>) -> Self {
        Self::Empty(msg.into())
    }

    /// Classify the error
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Request(e) if e.is_decode() => FailureKind::Malformed,
            Self::Request(e) if e.is_builder() => FailureKind::Config,
            Self::Request(_) => FailureKind::Transport,
            Self::ApiResponse { .. } => FailureKind::Status,
            Self::Json(_) | Self::Malformed(_) => FailureKind::Malformed,
            Self::Empty(_) => FailureKind::Empty,
            Self::Config(_) | Self::InvalidUrl(_) => FailureKind::Config,
        }
    }

    /// Convert into a core error carrying `code`, keeping this error as the source
    #[must_use]
    pub fn into_core(self, code: ErrorCode) -> CoreError {
        let code = if self.kind() == FailureKind::Config {
            ErrorCode::ConfigError
        } else {
            code
        };
        let err = match self.kind() {
            FailureKind::Transport | FailureKind::Status => CoreError::network(code, self.to_string()),
            _ => CoreError::new(code, self.to_string()),
        };
        err.with_source(self)
    }
}
