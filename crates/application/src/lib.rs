//! Application layer - Use cases and orchestration
//!
//! Defines the ports the trip calculation depends on and the service that
//! sequences geocoding, distance lookup, and emission calculation.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ErrorCategory};
pub use ports::*;
pub use services::*;
