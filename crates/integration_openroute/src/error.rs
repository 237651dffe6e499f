//! Provider error types and failure classification

use std::fmt;

use thiserror::Error;

/// Category of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// Caller-side input rejected before any request was sent
    InvalidInput,
    /// Provider rejected the request (4xx other than 403)
    ClientError,
    /// Provider rejected the credentials (403)
    Forbidden,
    /// Provider failed (5xx) or an unanticipated failure occurred
    ServerError,
    /// No response was received (connect failure, timeout)
    NetworkUnavailable,
    /// The geocoder found no match for the place name
    NotFound,
    /// A success response lacked the expected fields
    MalformedResponse,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid input",
            Self::ClientError => "client error",
            Self::Forbidden => "forbidden",
            Self::ServerError => "server error",
            Self::NetworkUnavailable => "network unavailable",
            Self::NotFound => "not found",
            Self::MalformedResponse => "malformed response",
        };
        f.write_str(label)
    }
}

/// Classify an HTTP status code
///
/// Returns `None` for 2xx statuses. Non-2xx statuses outside the 4xx/5xx
/// ranges are treated as client errors.
#[must_use]
pub const fn classify_status(status: u16) -> Option<ProviderErrorKind> {
    match status {
        200..=299 => None,
        403 => Some(ProviderErrorKind::Forbidden),
        500..=599 => Some(ProviderErrorKind::ServerError),
        _ => Some(ProviderErrorKind::ClientError),
    }
}

/// A classified failure of a geocoding or matrix call
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    status: Option<u16>,
    body: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    /// Create a new error of the given kind
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Attach the upstream HTTP status and raw body
    #[must_use]
    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.status = Some(status);
        self.body = Some(body.into());
        self
    }

    /// Attach the underlying error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Classify a failure that happened before any response arrived
    ///
    /// The request URL is stripped first, since it carries the API key as a
    /// query parameter.
    pub(crate) fn from_transport(err: reqwest::Error, context: &str) -> Self {
        let err = err.without_url();

        // builder errors mean the request was never valid, not that the network failed
        if err.is_builder() {
            return Self::new(
                ProviderErrorKind::ServerError,
                format!("{context}: invalid request: {err}"),
            )
            .with_source(err);
        }

        let message = if err.is_timeout() {
            format!("{context}: request timed out")
        } else {
            format!("{context}: {err}")
        };
        Self::new(ProviderErrorKind::NetworkUnavailable, message).with_source(err)
    }

    /// Category of the failure
    #[must_use]
    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    /// Human-readable description
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Upstream HTTP status, if a response was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Raw upstream body, if a response was received
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Read the body of a response, classifying non-2xx statuses
pub(crate) async fn read_body(
    response: reqwest::Response,
    context: &str,
) -> Result<String, ProviderError> {
    let status = response.status().as_u16();

    if let Some(kind) = classify_status(status) {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::new(kind, format!("{context}: HTTP {status}"))
            .with_response(status, body));
    }

    response.text().await.map_err(|e| {
        ProviderError::new(
            ProviderErrorKind::ServerError,
            format!("{context}: failed to read response body"),
        )
        .with_source(e)
    })
}
