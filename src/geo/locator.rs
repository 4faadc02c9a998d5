//! Location Resolution Module
//!
//! Turns free-form location text (grid squares, decimal or DMS
//! coordinates, state and country names) into coordinates. Formats are
//! tried in a fixed order and the first one that matches wins.

use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use super::distance::{bearing, great_circle_distance, midpoint_coordinate};
use super::gazetteer::Gazetteer;
use super::grid::{GridPrecision, coordinate_to_grid, grid_to_coordinate, is_valid_grid, normalize_grid};
use crate::models::{Coordinate, LocationResult};

static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?\d{1,3}(?:\.\d+)?)\s*(?:,\s*|\s+)([-+]?\d{1,3}(?:\.\d+)?)$")
        .expect("decimal pattern is valid")
});

static DMS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)^
        (\d{1,2})\s*°\s*(\d{1,2})\s*['′]\s*(?:(\d{1,2}(?:\.\d+)?)\s*["″]\s*)?([NSns])
        \s*[,\s]\s*
        (\d{1,3})\s*°\s*(\d{1,2})\s*['′]\s*(?:(\d{1,2}(?:\.\d+)?)\s*["″]\s*)?([EWew])
        $"#,
    )
    .expect("dms pattern is valid")
});

/// Outcome of parsing a location string
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Located(LocationResult),
    /// No format matched; carries the text that was rejected
    Unparseable { input: String },
}

impl ParseOutcome {
    #[must_use]
    pub fn located(self) -> Option<LocationResult> {
        match self {
            ParseOutcome::Located(result) => Some(result),
            ParseOutcome::Unparseable { .. } => None,
        }
    }

    #[must_use]
    pub fn is_located(&self) -> bool {
        matches!(self, ParseOutcome::Located(_))
    }
}

impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutcome::Located(result) => write!(
                f,
                "{} ({})",
                result.description,
                result.coordinate.format_coordinates()
            ),
            ParseOutcome::Unparseable { input } => write!(f, "Could not parse location: '{input}'"),
        }
    }
}

/// Grid lookup for callsigns, backed by whatever directory service the
/// caller has. Returns a grid square or nothing.
pub trait GridLookup {
    fn lookup(&self, callsign: &str) -> Option<String>;
}

type Strategy = fn(&GeoLocator, &str) -> Option<LocationResult>;

/// Parsing strategies in priority order
const STRATEGIES: &[(&str, Strategy)] = &[
    ("grid", GeoLocator::parse_grid),
    ("decimal", GeoLocator::parse_decimal),
    ("dms", GeoLocator::parse_dms),
    ("gazetteer", GeoLocator::parse_place),
];

/// Service for resolving location inputs and measuring paths between them
pub struct GeoLocator {
    gazetteer: Gazetteer,
    precision: GridPrecision,
}

impl GeoLocator {
    /// Create a locator; derived grid descriptions use 6 characters
    #[must_use]
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self {
            gazetteer,
            precision: GridPrecision::Subsquare,
        }
    }

    /// Precision used for grid squares derived from coordinates
    #[must_use]
    pub fn with_precision(mut self, precision: GridPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Resolve a location string into a coordinate and description
    pub fn parse_location(&self, text: &str) -> ParseOutcome {
        let text = text.trim();
        debug!("Resolving location input: {:?}", text);

        for (name, strategy) in STRATEGIES {
            if let Some(result) = strategy(self, text) {
                debug!(
                    "Resolved '{}' via {} to {} at ({:.4}, {:.4})",
                    text,
                    name,
                    result.description,
                    result.lat(),
                    result.lon()
                );
                return ParseOutcome::Located(result);
            }
        }

        debug!("No location format matched '{}'", text);
        ParseOutcome::Unparseable {
            input: text.to_string(),
        }
    }

    /// Resolve a callsign through `lookup`, accepting only a valid grid
    pub fn resolve_callsign(&self, lookup: &dyn GridLookup, callsign: &str) -> ParseOutcome {
        let callsign = callsign.trim().to_uppercase();
        let unparseable = || ParseOutcome::Unparseable {
            input: callsign.clone(),
        };

        let Some(grid) = lookup.lookup(&callsign) else {
            debug!("No grid found for callsign {}", callsign);
            return unparseable();
        };

        let grid = grid.trim();
        if !is_valid_grid(grid) {
            debug!("Lookup for {} returned invalid grid '{}'", callsign, grid);
            return unparseable();
        }

        match grid_to_coordinate(grid) {
            Ok(coordinate) => ParseOutcome::Located(LocationResult::new(
                coordinate,
                format!("{} ({})", callsign, normalize_grid(grid)),
            )),
            Err(_) => unparseable(),
        }
    }

    /// Great-circle distance in km between two coordinates
    #[must_use]
    pub fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        great_circle_distance(from.lat(), from.lon(), to.lat(), to.lon())
    }

    /// Initial bearing in degrees from `from` towards `to`
    #[must_use]
    pub fn bearing(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        bearing(from.lat(), from.lon(), to.lat(), to.lon())
    }

    /// Great-circle midpoint of the path
    #[must_use]
    pub fn midpoint(&self, from: &Coordinate, to: &Coordinate) -> Coordinate {
        midpoint_coordinate(from, to)
    }

    fn parse_grid(&self, text: &str) -> Option<LocationResult> {
        if !is_valid_grid(text) {
            return None;
        }
        let coordinate = grid_to_coordinate(text).ok()?;
        Some(LocationResult::new(coordinate, normalize_grid(text)))
    }

    fn parse_decimal(&self, text: &str) -> Option<LocationResult> {
        let captures = DECIMAL_PATTERN.captures(text)?;
        let lat = captures[1].parse::<f64>().ok()?;
        let lon = captures[2].parse::<f64>().ok()?;
        self.from_coordinates(lat, lon)
    }

    fn parse_dms(&self, text: &str) -> Option<LocationResult> {
        let captures = DMS_PATTERN.captures(text)?;
        let lat = dms_to_decimal(&captures, 1, 2, 3, 4)?;
        let lon = dms_to_decimal(&captures, 5, 6, 7, 8)?;
        self.from_coordinates(lat, lon)
    }

    fn parse_place(&self, text: &str) -> Option<LocationResult> {
        let place = self.gazetteer.find(text)?;
        let coordinate = Coordinate::new(place.lat, place.lon).ok()?;
        Some(LocationResult::new(coordinate, place.name.clone()))
    }

    fn from_coordinates(&self, lat: f64, lon: f64) -> Option<LocationResult> {
        let coordinate = Coordinate::new(lat, lon).ok()?;
        let grid = coordinate_to_grid(lat, lon, self.precision).ok()?;
        Some(LocationResult::new(coordinate, grid))
    }
}

fn dms_to_decimal(
    captures: &Captures<'_>,
    degrees: usize,
    minutes: usize,
    seconds: usize,
    hemisphere: usize,
) -> Option<f64> {
    let degrees = captures[degrees].parse::<f64>().ok()?;
    let minutes = captures[minutes].parse::<f64>().ok()?;
    let seconds = match captures.get(seconds) {
        Some(m) => m.as_str().parse::<f64>().ok()?,
        None => 0.0,
    };

    if minutes >= 60.0 || seconds >= 60.0 {
        return None;
    }

    let value = degrees + minutes / 60.0 + seconds / 3600.0;
    match &captures[hemisphere] {
        "S" | "s" | "W" | "w" => Some(-value),
        _ => Some(value),
    }
}
