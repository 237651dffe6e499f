//! Distance adapter - Implements DistancePort using integration_openroute

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{DistancePort, MessagePort};
use async_trait::async_trait;
use domain::Coordinates;
use integration_openroute::{
    MatrixClient, OpenRouteConfig, OrsMatrixClient, ProviderError, ProviderErrorKind,
};
use tracing::{debug, instrument};

use super::{body_text, detail_text, status_text};

/// Adapter for travel distances using the OpenRouteService matrix API
pub struct DistanceAdapter {
    client: Arc<dyn MatrixClient>,
    messages: Arc<dyn MessagePort>,
}

impl std::fmt::Debug for DistanceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceAdapter")
            .field("client", &"MatrixClient")
            .finish_non_exhaustive()
    }
}

impl DistanceAdapter {
    /// Create a new adapter around an existing client
    pub fn new(client: Arc<dyn MatrixClient>, messages: Arc<dyn MessagePort>) -> Self {
        Self { client, messages }
    }

    /// Create an adapter backed by the OpenRouteService matrix API
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(
        config: &OpenRouteConfig,
        messages: Arc<dyn MessagePort>,
    ) -> Result<Self, ApplicationError> {
        let client = OrsMatrixClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client), messages))
    }

    /// Map a provider error to an application error
    fn map_error(
        messages: &dyn MessagePort,
        origin: &Coordinates,
        destination: &Coordinates,
        err: &ProviderError,
    ) -> ApplicationError {
        let origin = origin.to_string();
        let destination = destination.to_string();
        match err.kind() {
            ProviderErrorKind::InvalidInput | ProviderErrorKind::ClientError => {
                ApplicationError::BadRequest(messages.format(
                    "matrix.client",
                    &[origin, destination, status_text(err), body_text(err)],
                ))
            },
            ProviderErrorKind::Forbidden => ApplicationError::Forbidden(
                messages.format("matrix.forbidden", &[origin, destination, body_text(err)]),
            ),
            ProviderErrorKind::ServerError | ProviderErrorKind::NotFound => {
                ApplicationError::Internal(
                    messages.format("matrix.server", &[origin, destination, detail_text(err)]),
                )
            },
            ProviderErrorKind::NetworkUnavailable => {
                ApplicationError::NetworkUnavailable(messages.format(
                    "matrix.network",
                    &[origin, destination, err.message().to_string()],
                ))
            },
            ProviderErrorKind::MalformedResponse => ApplicationError::Internal(
                messages.format("matrix.empty", &[origin, destination]),
            ),
        }
    }
}

#[async_trait]
impl DistancePort for DistanceAdapter {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn distance_km(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Result<f64, ApplicationError> {
        self.client
            .distance_km(origin, destination)
            .await
            .map_err(|e| {
                debug!(error = %e, kind = %e.kind(), "Distance lookup failed");
                Self::map_error(self.messages.as_ref(), origin, destination, &e)
            })
    }
}

#[cfg(test)]
mod tests {
    use application::ErrorCategory;

    use super::*;
    use crate::messages::TomlMessageCatalog;

    fn map(err: &ProviderError) -> ApplicationError {
        let origin = Coordinates::new(13.4, 52.5).unwrap();
        let destination = Coordinates::new(9.99, 53.55).unwrap();
        DistanceAdapter::map_error(&TomlMessageCatalog::builtin(), &origin, &destination, err)
    }

    #[test]
    fn client_error_is_bad_request() {
        let err = map(
            &ProviderError::new(ProviderErrorKind::ClientError, "HTTP 404")
                .with_response(404, "route not found"),
        );
        assert_eq!(err.category(), ErrorCategory::BadRequest);
        assert!(err.message().contains("404"));
        assert!(err.message().contains("route not found"));
        assert!(err.message().contains("13.400000, 52.500000"));
    }

    #[test]
    fn forbidden() {
        let err = map(
            &ProviderError::new(ProviderErrorKind::Forbidden, "HTTP 403")
                .with_response(403, "quota exceeded"),
        );
        assert_eq!(err.category(), ErrorCategory::Forbidden);
        assert!(err.message().contains("quota exceeded"));
    }

    #[test]
    fn server_error_is_internal() {
        let err = map(&ProviderError::new(ProviderErrorKind::ServerError, "HTTP 500").with_response(500, ""));
        assert_eq!(err.category(), ErrorCategory::InternalServerError);
        assert!(err.message().contains("HTTP 500"));
    }

    #[test]
    fn network_failure() {
        let err = map(&ProviderError::new(
            ProviderErrorKind::NetworkUnavailable,
            "connection refused",
        ));
        assert_eq!(err.category(), ErrorCategory::NetworkUnavailable);
        assert!(err.message().contains("connection refused"));
    }

    #[test]
    fn missing_distance_is_internal() {
        let err = map(&ProviderError::new(ProviderErrorKind::MalformedResponse, "empty"));
        assert_eq!(err.category(), ErrorCategory::InternalServerError);
        assert!(err.message().starts_with("Distance service returned no distance"));
    }
}
