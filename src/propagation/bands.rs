//! Amateur HF band table

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Band name, e.g. "20m"
    pub name: String,
    /// Representative operating frequency in MHz
    pub frequency_mhz: f64,
}

impl Band {
    pub fn new(name: impl Into<String>, frequency_mhz: f64) -> Self {
        Self {
            name: name.into(),
            frequency_mhz,
        }
    }
}

/// Immutable list of bands, lowest frequency first
#[derive(Debug, Clone, PartialEq)]
pub struct BandPlan {
    bands: Vec<Band>,
}

impl BandPlan {
    /// The eight HF amateur bands from 80 m to 10 m
    #[must_use]
    pub fn hf_amateur() -> Self {
        Self::new(vec![
            Band::new("80m", 3.6),
            Band::new("40m", 7.1),
            Band::new("30m", 10.1),
            Band::new("20m", 14.1),
            Band::new("17m", 18.1),
            Band::new("15m", 21.1),
            Band::new("12m", 24.9),
            Band::new("10m", 28.3),
        ])
    }

    #[must_use]
    pub fn new(mut bands: Vec<Band>) -> Self {
        bands.sort_by(|a, b| a.frequency_mhz.total_cmp(&b.frequency_mhz));
        Self { bands }
    }

    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Default for BandPlan {
    fn default() -> Self {
        Self::hf_amateur()
    }
}
