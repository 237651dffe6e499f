//! Distance service port

use async_trait::async_trait;
use domain::Coordinates;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for travel distance lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DistancePort: Send + Sync {
    /// Travel distance in kilometers from `origin` to `destination`, unrounded
    async fn distance_km(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Result<f64, ApplicationError>;
}
