//! Emission rate value object

use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::errors::DomainError;

/// Grams of CO2-equivalent emitted per kilometer traveled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EmissionRate(NonZeroU32);

impl EmissionRate {
    /// Create a new emission rate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmissionRate` for a zero rate.
    pub fn new(grams_per_km: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(grams_per_km)
            .map(Self)
            .ok_or(DomainError::InvalidEmissionRate(grams_per_km))
    }

    /// Get the rate in grams per kilometer
    #[must_use]
    pub const fn grams_per_km(self) -> u32 {
        self.0.get()
    }

    /// Unrounded kilograms of CO2 for the given distance
    #[must_use]
    pub fn kg_for_distance(self, distance_km: f64) -> f64 {
        distance_km * f64::from(self.grams_per_km()) / 1000.0
    }
}

impl fmt::Display for EmissionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g/km", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_rejected() {
        assert!(matches!(
            EmissionRate::new(0),
            Err(DomainError::InvalidEmissionRate(0))
        ));
    }

    #[test]
    fn positive_rate_accepted() {
        let rate = EmissionRate::new(142).unwrap();
        assert_eq!(rate.grams_per_km(), 142);
    }

    #[test]
    fn kg_for_distance() {
        let rate = EmissionRate::new(142).unwrap();
        assert!((rate.kg_for_distance(36.0) - 5.112).abs() < 1e-9);
        assert!(rate.kg_for_distance(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(EmissionRate::new(27).unwrap().to_string(), "27 g/km");
    }
}
