//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod distance_port;
mod geocoding_port;
mod message_port;

#[cfg(test)]
pub use distance_port::MockDistancePort;
pub use distance_port::DistancePort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use message_port::MockMessagePort;
pub use message_port::{MessagePort, fallback_message};
