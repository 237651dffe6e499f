//! Trip request and result

use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::EmissionRate;

/// A request to compute the emissions of a single trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    start: String,
    end: String,
    transport_method: String,
}

impl TripRequest {
    /// Create a new trip request
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        transport_method: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            transport_method: transport_method.into(),
        }
    }

    /// Place name the trip starts at
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Place name the trip ends at
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Transport method identifier
    #[must_use]
    pub fn transport_method(&self) -> &str {
        &self.transport_method
    }
}

/// Distance and emissions of a resolved trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripResult {
    distance_km: f64,
    co2_kg: f64,
}

impl TripResult {
    /// Compute the result for a distance and an emission rate
    ///
    /// `co2_kg` is rounded to one decimal, halves rounded up.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDistance` if the distance is negative,
    /// NaN, or infinite.
    pub fn new(distance_km: f64, rate: EmissionRate) -> Result<Self, DomainError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(DomainError::InvalidDistance(distance_km));
        }
        Ok(Self {
            distance_km,
            co2_kg: round_to_tenth(rate.kg_for_distance(distance_km)),
        })
    }

    /// Travel distance in kilometers, unrounded
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Emissions in kilograms CO2-equivalent, rounded to 0.1 kg
    #[must_use]
    pub const fn co2_kg(&self) -> f64 {
        self.co2_kg
    }
}

/// Round a non-negative value to one decimal, halves rounded up
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
