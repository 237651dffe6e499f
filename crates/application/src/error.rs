//! Application-level errors

use std::fmt;

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Stable failure category reported to callers
///
/// Every category is terminal; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Invalid caller input or a provider 4xx other than 403
    BadRequest,
    /// Provider rejected the credentials
    Forbidden,
    /// Geocoder returned zero matches
    NotFound,
    /// No response from a provider
    NetworkUnavailable,
    /// Provider 5xx, malformed payload, or an unanticipated failure
    InternalServerError,
}

impl ErrorCategory {
    /// HTTP-equivalent status code
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::NetworkUnavailable => 503,
            Self::InternalServerError => 500,
        }
    }

    /// Machine-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::NetworkUnavailable => "network_unavailable",
            Self::InternalServerError => "internal_server_error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Invalid input or rejected provider request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Provider rejected the credentials
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Place name could not be resolved
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider could not be reached
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// Provider or internal failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Category this error is reported under
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::BadRequest(_) => ErrorCategory::BadRequest,
            Self::Forbidden(_) => ErrorCategory::Forbidden,
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::NetworkUnavailable(_) => ErrorCategory::NetworkUnavailable,
            Self::Internal(_) | Self::Configuration(_) => ErrorCategory::InternalServerError,
        }
    }

    /// Message without the category prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::NetworkUnavailable(m)
            | Self::Internal(m)
            | Self::Configuration(m) => m,
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownTransportMethod(_) | DomainError::ValidationError(_) => {
                Self::BadRequest(err.to_string())
            },
            DomainError::InvalidCoordinates { .. }
            | DomainError::InvalidEmissionRate(_)
            | DomainError::InvalidDistance(_) => Self::Internal(err.to_string()),
        }
    }
}
