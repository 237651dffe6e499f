//! Geocoding adapter - Implements GeocodingPort using integration_openroute

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{GeocodingPort, MessagePort};
use async_trait::async_trait;
use domain::Coordinates;
use integration_openroute::{
    GeocodingClient, OpenRouteConfig, PeliasGeocodingClient, ProviderError, ProviderErrorKind,
};
use tracing::{debug, instrument};

use super::{body_text, detail_text, status_text};

/// Adapter for place name resolution using the OpenRouteService geocoder
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
    messages: Arc<dyn MessagePort>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish_non_exhaustive()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter around an existing client
    pub fn new(client: Arc<dyn GeocodingClient>, messages: Arc<dyn MessagePort>) -> Self {
        Self { client, messages }
    }

    /// Create an adapter backed by the Pelias geocoder
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(
        config: &OpenRouteConfig,
        messages: Arc<dyn MessagePort>,
    ) -> Result<Self, ApplicationError> {
        let client = PeliasGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client), messages))
    }

    /// Map a provider error to an application error
    fn map_error(messages: &dyn MessagePort, place: &str, err: &ProviderError) -> ApplicationError {
        let place = place.to_string();
        match err.kind() {
            ProviderErrorKind::InvalidInput => {
                ApplicationError::BadRequest(messages.format("city.blank", &[place]))
            },
            ProviderErrorKind::ClientError => ApplicationError::BadRequest(
                messages.format("geo.client", &[place, status_text(err), body_text(err)]),
            ),
            ProviderErrorKind::Forbidden => ApplicationError::Forbidden(
                messages.format("geo.forbidden", &[place, body_text(err)]),
            ),
            ProviderErrorKind::ServerError => ApplicationError::Internal(
                messages.format("geo.server", &[place, detail_text(err)]),
            ),
            ProviderErrorKind::NetworkUnavailable => ApplicationError::NetworkUnavailable(
                messages.format("geo.network", &[place, err.message().to_string()]),
            ),
            ProviderErrorKind::NotFound => {
                ApplicationError::NotFound(messages.format("geo.notfound", &[place]))
            },
            ProviderErrorKind::MalformedResponse => {
                ApplicationError::Internal(messages.format("geo.invalid", &[place]))
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, place: &str) -> Result<Coordinates, ApplicationError> {
        self.client.geocode(place).await.map_err(|e| {
            debug!(error = %e, kind = %e.kind(), "Geocoding failed");
            Self::map_error(self.messages.as_ref(), place, &e)
        })
    }
}
