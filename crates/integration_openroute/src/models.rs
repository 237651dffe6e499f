//! Wire types for the OpenRouteService geocoding and matrix APIs

use domain::Coordinates;
use serde::{Deserialize, Serialize};

/// Metric selector requesting distances in meters
const DISTANCE_METRIC: &str = "distance";

/// Body of a matrix request for a single origin/destination pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MatrixRequest {
    pub locations: Vec<[f64; 2]>,
    pub metrics: Vec<&'static str>,
}

impl MatrixRequest {
    /// Request the distance from `origin` to `destination`
    pub fn distance(origin: &Coordinates, destination: &Coordinates) -> Self {
        Self {
            locations: vec![origin.to_lon_lat(), destination.to_lon_lat()],
            metrics: vec![DISTANCE_METRIC],
        }
    }
}

/// Matrix response; cells may be `null` for unroutable pairs
#[derive(Debug, Deserialize)]
pub(crate) struct MatrixResponse {
    pub distances: Option<Vec<Vec<Option<f64>>>>,
}

impl MatrixResponse {
    /// The origin→destination cell (row 0, column 1) in meters
    pub fn origin_to_destination(&self) -> Option<f64> {
        self.distances
            .as_ref()?
            .first()?
            .get(1)
            .copied()
            .flatten()
    }
}

/// Pelias GeoJSON feature collection
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub features: Option<Vec<GeocodeFeature>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeFeature {
    pub geometry: Option<GeocodeGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeGeometry {
    /// `[lon, lat]`, optionally followed by elevation
    pub coordinates: Option<Vec<serde_json::Value>>,
}

impl GeocodeGeometry {
    /// Longitude and latitude if both are present and numeric
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let values = self.coordinates.as_ref()?;
        let lon = values.first()?.as_f64()?;
        let lat = values.get(1)?.as_f64()?;
        Some((lon, lat))
    }
}
