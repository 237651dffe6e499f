//! Geographic coordinates value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// A geographic point as a (longitude, latitude) pair
///
/// Longitude comes first to match the GeoJSON ordering used by geocoding
/// and matrix providers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
}

impl Coordinates {
    /// Create new coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if longitude is not in
    /// [-180, 180] or latitude is not in [-90, 90]. NaN is rejected as well.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCoordinates {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The pair in wire order, `[longitude, latitude]`
    #[must_use]
    pub const fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let coords = Coordinates::new(13.405, 52.52).expect("valid coordinates");
        assert!((coords.longitude() - 13.405).abs() < f64::EPSILON);
        assert!((coords.latitude() - 52.52).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinates::new(180.0, 90.0).is_ok());
        assert!(Coordinates::new(-180.0, -90.0).is_ok());
        assert!(Coordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(Coordinates::new(181.0, 0.0).is_err());
        assert!(Coordinates::new(-181.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(Coordinates::new(0.0, 91.0).is_err());
        assert!(Coordinates::new(0.0, -91.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_lon_lat_order() {
        let coords = Coordinates::new(13.4, 52.5).expect("valid");
        assert_eq!(coords.to_lon_lat(), [13.4, 52.5]);
    }

    #[test]
    fn test_display() {
        let coords = Coordinates::new(13.405, 52.52).expect("valid");
        let display = format!("{coords}");
        assert!(display.starts_with("13.405"));
        assert!(display.contains("52.52"));
    }

    #[test]
    fn test_serialization() {
        let coords = Coordinates::new(13.405, 52.52).expect("valid");
        let json = serde_json::to_value(coords).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "longitude": 13.405, "latitude": 52.52 })
        );
    }
}
