//! Static table of US states and countries used for name lookups

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{HfPropError, Result};

const BUILTIN_PLACES: &str = include_str!("gazetteer.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    State,
    Country,
}

/// One gazetteer record. The coordinates are a representative center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Postal abbreviation, states only
    #[serde(default)]
    pub abbrev: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub kind: PlaceKind,
}

/// Read-only place table with exact, case-insensitive lookups
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Gazetteer {
    /// Load the table shipped with the crate
    pub fn builtin() -> Result<Self> {
        let places: Vec<Place> = serde_json::from_str(BUILTIN_PLACES)
            .map_err(|e| HfPropError::parse(format!("Built-in gazetteer is malformed: {e}")))?;
        debug!("Loaded {} gazetteer places", places.len());
        Ok(Self::from_places(places))
    }

    #[must_use]
    pub fn from_places(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// Find a place by full name, or a state by its abbreviation.
    /// Table order decides between duplicates.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Place> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.places.iter().find(|place| {
            place.name.eq_ignore_ascii_case(query)
                || place
                    .abbrev
                    .as_deref()
                    .is_some_and(|abbrev| abbrev.eq_ignore_ascii_case(query))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads() {
        let gazetteer = Gazetteer::builtin().unwrap();
        assert!(gazetteer.len() > 100);

        let states = gazetteer
            .places
            .iter()
            .filter(|p| p.kind == PlaceKind::State)
            .count();
        assert_eq!(states, 51);
    }

    #[test]
    fn test_builtin_coordinates_in_range() {
        let gazetteer = Gazetteer::builtin().unwrap();
        for place in &gazetteer.places {
            assert!((-90.0..=90.0).contains(&place.lat), "{}", place.name);
            assert!((-180.0..=180.0).contains(&place.lon), "{}", place.name);
        }
    }

    #[test]
    fn test_find_by_name_and_abbreviation() {
        let gazetteer = Gazetteer::builtin().unwrap();

        let maine = gazetteer.find("maine").unwrap();
        assert_eq!(maine.abbrev.as_deref(), Some("ME"));
        assert_eq!(gazetteer.find("ME").unwrap().name, "Maine");
        assert_eq!(gazetteer.find("Japan").unwrap().kind, PlaceKind::Country);
        assert_eq!(gazetteer.find("  NEW ZEALAND ").unwrap().name, "New Zealand");
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let gazetteer = Gazetteer::builtin().unwrap();
        assert!(gazetteer.find("Main").is_none());
        assert!(gazetteer.find("Germny").is_none());
        assert!(gazetteer.find("").is_none());
    }

    #[test]
    fn test_first_entry_wins() {
        let gazetteer = Gazetteer::from_places(vec![
            Place {
                name: "Georgia".to_string(),
                abbrev: Some("GA".to_string()),
                lat: 32.7,
                lon: -83.4,
                kind: PlaceKind::State,
            },
            Place {
                name: "Georgia".to_string(),
                abbrev: None,
                lat: 42.3,
                lon: 43.4,
                kind: PlaceKind::Country,
            },
        ]);
        assert_eq!(gazetteer.find("georgia").unwrap().kind, PlaceKind::State);
    }
}
