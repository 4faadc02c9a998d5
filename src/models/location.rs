//! Location model for geographic coordinates and resolved locations

use serde::{Deserialize, Serialize};

use crate::{HfPropError, Result};

/// A point on the Earth's surface in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside [-90,90] x [-180,180]
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(HfPropError::validation(format!(
                "Latitude must be between -90 and 90, got: {lat}"
            )));
        }

        if !(-180.0..=180.0).contains(&lon) {
            return Err(HfPropError::validation(format!(
                "Longitude must be between -180 and 180, got: {lon}"
            )));
        }

        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// A parsed location plus a human-readable description.
///
/// The description is a grid square, a "lat,lon" string or a gazetteer
/// name. It is for display only and never parsed again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationResult {
    pub coordinate: Coordinate,
    pub description: String,
}

impl LocationResult {
    #[must_use]
    pub fn new(coordinate: Coordinate, description: impl Into<String>) -> Self {
        Self {
            coordinate,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.coordinate.lat()
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.coordinate.lon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_format_coordinates() {
        let coordinate = Coordinate::new(43.65, -70.25).unwrap();
        assert_eq!(coordinate.format_coordinates(), "43.6500, -70.2500");
    }
}
