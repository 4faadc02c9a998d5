//! Great-circle geometry on a spherical Earth

use haversine::{Location as HaversineLocation, Units, distance};

use crate::models::Coordinate;

/// Mean Earth radius used by every calculation in this module
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const KM_PER_MILE: f64 = 1.609_344;

/// Haversine distance in kilometres
#[must_use]
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = HaversineLocation {
        latitude: lat1,
        longitude: lon1,
    };
    let to = HaversineLocation {
        latitude: lat2,
        longitude: lon2,
    };
    distance(from, to, Units::Kilometers)
}

/// Initial bearing from point 1 towards point 2, degrees in [0, 360).
///
/// Identical points give an arbitrary bearing.
#[must_use]
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let x = delta_lambda.sin() * phi2.cos();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    let degrees = x.atan2(y).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Great-circle midpoint, returned as (lat, lon) with lon in [-180, 180)
#[must_use]
pub fn midpoint(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let lambda1 = lon1.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let bx = phi2.cos() * delta_lambda.cos();
    let by = phi2.cos() * delta_lambda.sin();

    let phi_m = (phi1.sin() + phi2.sin()).atan2(((phi1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lambda_m = lambda1 + by.atan2(phi1.cos() + bx);

    let lon = (lambda_m.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    (phi_m.to_degrees(), lon)
}

/// Great-circle midpoint between two coordinates
#[must_use]
pub fn midpoint_coordinate(from: &Coordinate, to: &Coordinate) -> Coordinate {
    let (lat, lon) = midpoint(from.lat(), from.lon(), to.lat(), to.lon());
    // Rounding can push a pole or the antimeridian a hair out of range
    Coordinate::new(lat.clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0)).unwrap_or(*from)
}

/// Convert degrees to a 16-point compass name
#[must_use]
pub fn bearing_to_cardinal(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let sector = ((degrees.rem_euclid(360.0) + 11.25) / 22.5).floor() as usize % 16;
    POINTS[sector]
}

/// Format a bearing like "54° (NE)"
#[must_use]
pub fn format_bearing(degrees: f64) -> String {
    format!("{:.0}° ({})", degrees, bearing_to_cardinal(degrees))
}

/// Format a distance like "5259 km (3268 mi)"
#[must_use]
pub fn format_distance(km: f64) -> String {
    format!("{:.0} km ({:.0} mi)", km, km / KM_PER_MILE)
}
