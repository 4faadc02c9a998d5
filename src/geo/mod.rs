//! Geographic utilities
//!
//! - Grid: Maidenhead locator encoding and decoding
//! - Distance: great-circle distance, bearing and midpoint
//! - Gazetteer: static state and country table
//! - Locator: ordered parsing of free-form location text

pub mod distance;
pub mod gazetteer;
pub mod grid;
pub mod locator;

pub use distance::{
    EARTH_RADIUS_KM, bearing, bearing_to_cardinal, format_bearing, format_distance,
    great_circle_distance, midpoint, midpoint_coordinate,
};
pub use gazetteer::{Gazetteer, Place, PlaceKind};
pub use grid::{GridPrecision, coordinate_to_grid, grid_to_coordinate, is_valid_grid, normalize_grid};
pub use locator::{GeoLocator, GridLookup, ParseOutcome};
