//! API-specific error types
//!
//! Classifies backend failures so callers can decide what to surface. All
//! retry metadata here is advisory: requests are user-initiated and the
//! client runs no automatic retry loop.

use std::time::Duration;

use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403) - retryable after re-login
    Authentication,
    /// Field-level validation rejection (400 with a field map)
    Validation,
    /// Server errors (5xx) - retryable by repeating the action
    Server,
    /// Other client errors (4xx) - non-retryable
    Client,
    /// Network/connection errors - retryable by repeating the action
    Network,
    /// Configuration errors - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Validation { .. } => ApiErrorCategory::Validation,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether repeating the user action could succeed
    #[must_use]
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }

    /// Short message suitable for a user-facing notification.
    ///
    /// Validation failures name the first offending field; everything else
    /// collapses to a generic summary. Full detail stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field, message } => format!("{field}: {message}"),
            Self::Auth(_) => "Your session is no longer valid. Please log in again.".to_string(),
            Self::Timeout(_) | Self::Network(_) => {
                "Could not reach the server. Please try again.".to_string()
            }
            Self::Server(_) => "The server had a problem. Please try again.".to_string(),
            Self::Client(_) | Self::Config(_) => "The request could not be completed.".to_string(),
        }
    }
}
