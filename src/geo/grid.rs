//! Maidenhead grid square conversion
//!
//! A field (first letter pair, A-R) covers 20° of longitude by 10° of
//! latitude, a square (digit pair) 2° by 1°, and a subsquare (optional
//! second letter pair, A-X) 2/24° by 1/24°. Conversions to coordinates
//! always yield the center of the most specific cell given.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::models::Coordinate;
use crate::{HfPropError, Result};

static GRID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Ra-r]{2}[0-9]{2}(?:[A-Xa-x]{2})?$").expect("grid pattern is valid")
});

const FIELD_LON_DEG: f64 = 20.0;
const FIELD_LAT_DEG: f64 = 10.0;
const SQUARE_LON_DEG: f64 = 2.0;
const SQUARE_LAT_DEG: f64 = 1.0;
const SUBSQUARES_PER_SQUARE: f64 = 24.0;

/// Number of characters produced when encoding a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridPrecision {
    /// 4 characters, e.g. "FN43"
    Square,
    /// 6 characters, e.g. "FN43vp"
    Subsquare,
}

impl GridPrecision {
    /// Map a character count to a precision
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            4 => Ok(GridPrecision::Square),
            6 => Ok(GridPrecision::Subsquare),
            other => Err(HfPropError::validation(format!(
                "Grid precision must be 4 or 6 characters, got: {other}"
            ))),
        }
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        match self {
            GridPrecision::Square => 4,
            GridPrecision::Subsquare => 6,
        }
    }
}

/// Check whether `grid` is a 4 or 6 character Maidenhead locator
#[must_use]
pub fn is_valid_grid(grid: &str) -> bool {
    GRID_PATTERN.is_match(grid)
}

/// Normalise a valid locator to conventional case ("fn43VP" -> "FN43vp")
#[must_use]
pub fn normalize_grid(grid: &str) -> String {
    grid.chars()
        .enumerate()
        .map(|(i, c)| {
            if i < 4 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Convert a grid square to the center coordinate of its cell
pub fn grid_to_coordinate(grid: &str) -> Result<Coordinate> {
    let grid = grid.trim();
    if grid.len() < 4 || !is_valid_grid(grid) {
        return Err(HfPropError::validation(format!(
            "'{grid}' is not a valid grid square"
        )));
    }

    let bytes = grid.to_ascii_uppercase().into_bytes();
    let lon_field = f64::from(bytes[0] - b'A');
    let lat_field = f64::from(bytes[1] - b'A');
    let lon_square = f64::from(bytes[2] - b'0');
    let lat_square = f64::from(bytes[3] - b'0');

    let mut lon = lon_field * FIELD_LON_DEG - 180.0 + lon_square * SQUARE_LON_DEG;
    let mut lat = lat_field * FIELD_LAT_DEG - 90.0 + lat_square * SQUARE_LAT_DEG;

    if bytes.len() == 6 {
        let lon_sub = f64::from(bytes[4] - b'A');
        let lat_sub = f64::from(bytes[5] - b'A');
        let sub_lon_deg = SQUARE_LON_DEG / SUBSQUARES_PER_SQUARE;
        let sub_lat_deg = SQUARE_LAT_DEG / SUBSQUARES_PER_SQUARE;
        lon += lon_sub * sub_lon_deg + sub_lon_deg / 2.0;
        lat += lat_sub * sub_lat_deg + sub_lat_deg / 2.0;
    } else {
        lon += SQUARE_LON_DEG / 2.0;
        lat += SQUARE_LAT_DEG / 2.0;
    }

    Coordinate::new(lat, lon)
}

/// Encode a coordinate as a grid square of the requested precision
pub fn coordinate_to_grid(lat: f64, lon: f64, precision: GridPrecision) -> Result<String> {
    // Validates the ranges before any index arithmetic
    let coordinate = Coordinate::new(lat, lon)?;

    let lon = coordinate.lon() + 180.0;
    let lat = coordinate.lat() + 90.0;

    // The upper edges (lat 90, lon 180) belong to the last cell
    let lon_field = cell_index(lon / FIELD_LON_DEG, 17);
    let lat_field = cell_index(lat / FIELD_LAT_DEG, 17);

    let lon_rem = lon - f64::from(lon_field) * FIELD_LON_DEG;
    let lat_rem = lat - f64::from(lat_field) * FIELD_LAT_DEG;
    let lon_square = cell_index(lon_rem / SQUARE_LON_DEG, 9);
    let lat_square = cell_index(lat_rem / SQUARE_LAT_DEG, 9);

    let mut grid = String::with_capacity(precision.char_count());
    grid.push(char::from(b'A' + lon_field));
    grid.push(char::from(b'A' + lat_field));
    grid.push(char::from(b'0' + lon_square));
    grid.push(char::from(b'0' + lat_square));

    if precision == GridPrecision::Subsquare {
        let lon_sub_rem = lon_rem - f64::from(lon_square) * SQUARE_LON_DEG;
        let lat_sub_rem = lat_rem - f64::from(lat_square) * SQUARE_LAT_DEG;
        let lon_sub = cell_index(lon_sub_rem / SQUARE_LON_DEG * SUBSQUARES_PER_SQUARE, 23);
        let lat_sub = cell_index(lat_sub_rem / SQUARE_LAT_DEG * SUBSQUARES_PER_SQUARE, 23);
        grid.push(char::from(b'a' + lon_sub));
        grid.push(char::from(b'a' + lat_sub));
    }

    Ok(grid)
}

fn cell_index(value: f64, max: u8) -> u8 {
    // Truncation is intended: value is non-negative and clamped below
    (value.floor().max(0.0) as u8).min(max)
}
