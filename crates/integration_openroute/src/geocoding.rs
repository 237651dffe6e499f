//! Pelias geocoding client
//!
//! Converts place names to coordinates using the OpenRouteService
//! geocoding search endpoint. The first (best-ranked) feature wins; no
//! disambiguation between multiple matches is attempted.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinates;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::OpenRouteConfig;
use crate::error::{ProviderError, ProviderErrorKind, read_body};
use crate::models::GeocodeResponse;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to its coordinates
    async fn geocode(&self, place: &str) -> Result<Coordinates, ProviderError>;
}

/// Geocoding client for the OpenRouteService (Pelias) search API
#[derive(Debug)]
pub struct PeliasGeocodingClient {
    client: Client,
    config: OpenRouteConfig,
}

impl PeliasGeocodingClient {
    /// Create a new geocoding client
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
                    "failed to initialize geocoding HTTP client",
                )
                .with_source(e)
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Extract the first feature's coordinates from a search response
    fn parse_search_response(place: &str, body: &str) -> Result<Coordinates, ProviderError> {
        let raw: GeocodeResponse = serde_json::from_str(body).map_err(|e| {
            ProviderError::new(
                ProviderErrorKind::MalformedResponse,
                format!("Geocoding '{place}': response is not valid JSON"),
            )
            .with_source(e)
        })?;

        let Some(feature) = raw.features.as_ref().and_then(|f| f.first()) else {
            return Err(ProviderError::new(
                ProviderErrorKind::NotFound,
                format!("No location found for '{place}'"),
            ));
        };

        let malformed = || {
            ProviderError::new(
                ProviderErrorKind::MalformedResponse,
                format!("Geocoding '{place}': feature has no valid coordinates"),
            )
        };

        let (lon, lat) = feature
            .geometry
            .as_ref()
            .and_then(|g| g.lon_lat())
            .ok_or_else(malformed)?;

        Coordinates::new(lon, lat).map_err(|e| malformed().with_source(e))
    }
}

#[async_trait]
impl GeocodingClient for PeliasGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Coordinates, ProviderError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(ProviderError::new(
                ProviderErrorKind::InvalidInput,
                "Place name must not be blank",
            ));
        }

        let params = [
            ("api_key", self.config.api_key_str()),
            ("text", place),
            ("layers", self.config.geocode_layers.as_str()),
        ];

        debug!(%place, "Geocoding place");

        let context = format!("Geocoding '{place}'");
        let response = self
            .client
            .get(&self.config.geocode_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(e, &context))?;

        let body = read_body(response, &context).await.inspect_err(|e| {
            warn!(%place, status = ?e.status(), "Geocoding request failed");
        })?;

        let coordinates = Self::parse_search_response(place, &body)?;
        debug!(%place, %coordinates, "Geocoded place");
        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_feature_wins() {
        let body = r#"{
            "features": [
                { "geometry": { "coordinates": [13.4, 52.5] } },
                { "geometry": { "coordinates": [-72.7, 41.6] } }
            ]
        }"#;
        let coords = PeliasGeocodingClient::parse_search_response("Berlin", body).unwrap();
        assert!((coords.longitude() - 13.4).abs() < f64::EPSILON);
        assert!((coords.latitude() - 52.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_empty_features_is_not_found() {
        let err = PeliasGeocodingClient::parse_search_response("UnknownCity", r#"{"features": []}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::NotFound);
        assert!(err.message().contains("UnknownCity"));
    }

    #[test]
    fn test_parse_missing_features_is_not_found() {
        let err = PeliasGeocodingClient::parse_search_response("X", "{}").unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::NotFound);
    }

    #[test]
    fn test_parse_missing_geometry_is_malformed() {
        let err =
            PeliasGeocodingClient::parse_search_response("X", r#"{"features": [{}]}"#).unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
    }

    #[test]
    fn test_parse_single_coordinate_is_malformed() {
        let body = r#"{"features": [{ "geometry": { "coordinates": [13.4] } }]}"#;
        let err = PeliasGeocodingClient::parse_search_response("X", body).unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
    }

    #[test]
    fn test_parse_out_of_range_is_malformed() {
        let body = r#"{"features": [{ "geometry": { "coordinates": [200.0, 52.5] } }]}"#;
        let err = PeliasGeocodingClient::parse_search_response("X", body).unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
    }

    #[test]
    fn test_parse_invalid_json_is_malformed() {
        let err = PeliasGeocodingClient::parse_search_response("X", "<html>").unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_blank_place_rejected_without_request() {
        // Nothing listens on this port; a request would surface as a network error
        let config = OpenRouteConfig::for_testing("http://127.0.0.1:9");
        let client = PeliasGeocodingClient::new(&config).unwrap();

        for place in ["", "   ", "\t"] {
            let err = client.geocode(place).await.unwrap_err();
            assert_eq!(err.kind(), ProviderErrorKind::InvalidInput);
        }
    }
}
