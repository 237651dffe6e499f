//! OpenRouteService integration
//!
//! Resolves place names to coordinates via the Pelias-based
//! [geocoding API](https://openrouteservice.org/dev/#/api-docs/geocode) and
//! obtains road distances via the
//! [matrix API](https://openrouteservice.org/dev/#/api-docs/matrix).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`GeocodingClient`] resolves place names, implemented by [`PeliasGeocodingClient`].
//! [`MatrixClient`] measures origin→destination distances, implemented by
//! [`OrsMatrixClient`]. Both classify failures into [`ProviderError`] through the
//! pure [`classify_status`] function.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_openroute::{GeocodingClient, MatrixClient, OpenRouteConfig};
//! use integration_openroute::{OrsMatrixClient, PeliasGeocodingClient};
//!
//! let config = OpenRouteConfig::new("my-api-key");
//! let geocoder = PeliasGeocodingClient::new(&config)?;
//! let matrix = OrsMatrixClient::new(&config)?;
//!
//! let berlin = geocoder.geocode("Berlin").await?;
//! let hamburg = geocoder.geocode("Hamburg").await?;
//! let km = matrix.distance_km(&berlin, &hamburg).await?;
//! ```

mod config;
mod error;
mod geocoding;
mod matrix;
mod models;

pub use config::OpenRouteConfig;
pub use error::{ProviderError, ProviderErrorKind, classify_status};
pub use geocoding::{GeocodingClient, PeliasGeocodingClient};
pub use matrix::{MatrixClient, OrsMatrixClient};
