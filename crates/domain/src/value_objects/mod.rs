//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod emission_rate;

pub use coordinates::Coordinates;
pub use emission_rate::EmissionRate;
