//! Domain layer for the CO2 trip calculator
//!
//! Contains the emission catalog, trip value types, and domain errors.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
