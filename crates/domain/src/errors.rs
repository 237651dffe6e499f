//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid longitude/latitude range
    #[error(
        "Invalid coordinates: longitude {longitude} must be -180 to 180, latitude {latitude} must be -90 to 90"
    )]
    InvalidCoordinates { longitude: f64, latitude: f64 },

    /// Emission rate must be a positive number of grams per kilometer
    #[error("Invalid emission rate: {0} g/km")]
    InvalidEmissionRate(u32),

    /// Distance must be finite and non-negative
    #[error("Invalid distance: {0} km")]
    InvalidDistance(f64),

    /// Transport method not present in the emission catalog
    #[error("Unknown transport method: {0}")]
    UnknownTransportMethod(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
