//! Geometry of the path between two stations

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::muf::estimate_hops;
use crate::geo::{EARTH_RADIUS_KM, bearing, great_circle_distance, midpoint_coordinate};
use crate::models::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    /// Short-path great-circle distance
    pub distance_km: f64,
    /// Short-path beam heading from the first station
    pub bearing_deg: f64,
    /// Beam heading from the second station back to the first
    pub reverse_bearing_deg: f64,
    /// The other way round the globe
    pub long_path_km: f64,
    pub midpoint: Coordinate,
    pub hops: u32,
}

impl PathGeometry {
    #[must_use]
    pub fn between(from: &Coordinate, to: &Coordinate) -> Self {
        let distance_km = great_circle_distance(from.lat(), from.lon(), to.lat(), to.lon());
        Self {
            distance_km,
            bearing_deg: bearing(from.lat(), from.lon(), to.lat(), to.lon()),
            reverse_bearing_deg: bearing(to.lat(), to.lon(), from.lat(), from.lon()),
            long_path_km: (2.0 * PI * EARTH_RADIUS_KM - distance_km).max(0.0),
            midpoint: midpoint_coordinate(from, to),
            hops: estimate_hops(distance_km),
        }
    }

    /// Long-path beam heading from the first station
    #[must_use]
    pub fn long_path_bearing_deg(&self) -> f64 {
        (self.bearing_deg + 180.0).rem_euclid(360.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_fn43_to_jo01() {
        let path = PathGeometry::between(&coordinate(43.5, -71.0), &coordinate(51.5, 1.0));

        assert!((5200.0..5320.0).contains(&path.distance_km));
        assert_eq!(path.hops, 3);
        assert!((path.distance_km + path.long_path_km - 2.0 * PI * EARTH_RADIUS_KM).abs() < 1e-6);
        assert!((53.0..54.0).contains(&path.midpoint.lat()));
        assert!(path.reverse_bearing_deg > 270.0);
    }

    #[test]
    fn test_same_point() {
        let here = coordinate(10.0, 20.0);
        let path = PathGeometry::between(&here, &here);

        assert_eq!(path.distance_km, 0.0);
        assert_eq!(path.hops, 1);
        assert!((path.midpoint.lat() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_long_path_bearing() {
        let path = PathGeometry::between(&coordinate(0.0, 0.0), &coordinate(0.0, 90.0));
        assert!((path.bearing_deg - 90.0).abs() < 1e-9);
        assert!((path.long_path_bearing_deg() - 270.0).abs() < 1e-9);
    }
}
