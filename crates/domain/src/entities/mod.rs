//! Domain entities

pub mod emission_catalog;
mod trip;

pub use emission_catalog::EmissionCatalog;
pub use trip::{TripRequest, TripResult, round_to_tenth};
