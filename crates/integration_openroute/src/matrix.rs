//! Distance matrix client
//!
//! Requests a two-location matrix from the OpenRouteService matrix API and
//! reads the origin→destination distance.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinates;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, warn};

use crate::config::OpenRouteConfig;
use crate::error::{ProviderError, ProviderErrorKind, read_body};
use crate::models::{MatrixRequest, MatrixResponse};

/// Trait for distance matrix clients
#[async_trait]
pub trait MatrixClient: Send + Sync {
    /// Travel distance in kilometers from `origin` to `destination`
    async fn distance_km(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Result<f64, ProviderError>;
}

/// Matrix client for the OpenRouteService v2 matrix API
#[derive(Debug)]
pub struct OrsMatrixClient {
    client: Client,
    config: OpenRouteConfig,
}

impl OrsMatrixClient {
    /// Create a new matrix client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OpenRouteConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("co2-calculator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ProviderError::new(
                    ProviderErrorKind::ServerError,
                    "failed to initialize matrix HTTP client",
                )
                .with_source(e)
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Read the origin→destination distance in meters and convert to km
    fn parse_matrix_response(body: &str) -> Result<f64, ProviderError> {
        let raw: MatrixResponse = serde_json::from_str(body).map_err(|e| {
            ProviderError::new(
                ProviderErrorKind::MalformedResponse,
                "Matrix response is not valid JSON",
            )
            .with_source(e)
        })?;

        let meters = raw
            .origin_to_destination()
            .filter(|m| m.is_finite() && *m >= 0.0)
            .ok_or_else(|| {
                ProviderError::new(
                    ProviderErrorKind::MalformedResponse,
                    "Matrix response has no origin→destination distance",
                )
            })?;

        Ok(meters / 1000.0)
    }
}

#[async_trait]
impl MatrixClient for OrsMatrixClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn distance_km(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Result<f64, ProviderError> {
        let request = MatrixRequest::distance(origin, destination);
        let context = format!("Matrix {origin} → {destination}");

        debug!(url = %self.config.matrix_url, "Requesting distance matrix");

        let response = self
            .client
            .post(&self.config.matrix_url)
            .header(AUTHORIZATION, self.config.api_key_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, &context))?;

        let body = read_body(response, &context).await.inspect_err(|e| {
            warn!(status = ?e.status(), "Matrix request failed");
        })?;

        let km = Self::parse_matrix_response(&body)?;
        debug!(distance_km = km, "Distance resolved");
        Ok(km)
    }
}
