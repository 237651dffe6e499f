//! Infrastructure adapters
//!
//! Adapters connect application ports to the OpenRouteService clients and
//! translate provider failures into user-facing application errors.

mod distance_adapter;
mod geocoding_adapter;

pub use distance_adapter::DistanceAdapter;
pub use geocoding_adapter::GeocodingAdapter;

use integration_openroute::ProviderError;

/// Upstream status as text, empty when no response was received
fn status_text(err: &ProviderError) -> String {
    err.status().map(|s| s.to_string()).unwrap_or_default()
}

/// Upstream body, empty when no response was received
fn body_text(err: &ProviderError) -> String {
    err.body().unwrap_or_default().to_string()
}

/// Best available description: status and body if present, else the message
fn detail_text(err: &ProviderError) -> String {
    match (err.status(), err.body()) {
        (Some(status), Some(body)) if !body.is_empty() => format!("HTTP {status}: {body}"),
        (Some(status), _) => format!("HTTP {status}"),
        _ => err.message().to_string(),
    }
}
