//! Geocoding service port
//!
//! Resolves free-text place names to coordinates.

use async_trait::async_trait;
use domain::Coordinates;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to coordinates
    ///
    /// Blank names are rejected as `BadRequest` and a place without matches
    /// is reported as `NotFound`.
    async fn resolve(&self, place: &str) -> Result<Coordinates, ApplicationError>;
}
