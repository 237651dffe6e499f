//! Trip emission service
//!
//! Resolves both ends of a trip, measures the distance between them, and
//! applies the emission rate of the chosen transport method. Each step
//! depends on the previous one, so the calls run strictly in sequence and
//! the first failure is returned unchanged.

use std::{fmt, sync::Arc};

use domain::{EmissionCatalog, TripRequest, TripResult};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DistancePort, GeocodingPort, MessagePort},
};

/// Computes distance and CO2 emissions for a trip
pub struct TripEmissionService {
    geocoder: Arc<dyn GeocodingPort>,
    distance: Arc<dyn DistancePort>,
    catalog: Arc<EmissionCatalog>,
    messages: Arc<dyn MessagePort>,
}

impl fmt::Debug for TripEmissionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripEmissionService")
            .field("methods", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl TripEmissionService {
    /// Create a new trip emission service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        distance: Arc<dyn DistancePort>,
        catalog: Arc<EmissionCatalog>,
        messages: Arc<dyn MessagePort>,
    ) -> Self {
        Self {
            geocoder,
            distance,
            catalog,
            messages,
        }
    }

    /// The emission catalog used for rate lookups
    #[must_use]
    pub fn catalog(&self) -> &EmissionCatalog {
        &self.catalog
    }

    /// Compute distance and emissions for a trip
    ///
    /// Order: geocode start, geocode end, distance, rate lookup. An unknown
    /// transport method is only detected after the distance is known.
    #[instrument(
        skip(self, request),
        fields(
            start = %request.start(),
            end = %request.end(),
            method = %request.transport_method()
        )
    )]
    pub async fn compute_trip(&self, request: &TripRequest) -> Result<TripResult, ApplicationError> {
        let origin = self.geocoder.resolve(request.start()).await?;
        let destination = self.geocoder.resolve(request.end()).await?;
        debug!(%origin, %destination, "Both places resolved");

        let distance_km = self
            .distance
            .distance_km(&origin, &destination)
            .await
            .inspect_err(|e| {
                warn!(
                    start = %request.start(),
                    end = %request.end(),
                    category = %e.category(),
                    error = %e,
                    "Distance lookup failed"
                );
            })?;
        debug!(distance_km, "Distance resolved");

        let method = request.transport_method();
        let rate = self.catalog.require_rate(method).map_err(|e| {
            debug!(error = %e, "Transport method rejected");
            ApplicationError::BadRequest(self.messages.format(
                "transport.unknown",
                &[method.to_string(), self.catalog.methods_hint()],
            ))
        })?;

        let result = TripResult::new(distance_km, rate)?;
        info!(
            distance_km = result.distance_km(),
            co2_kg = result.co2_kg(),
            "Trip emissions computed"
        );
        Ok(result)
    }
}
