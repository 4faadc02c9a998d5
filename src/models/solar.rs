//! Space-weather snapshot model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sunspot number used when nothing better is known
pub const DEFAULT_SSN: u32 = 100;
/// Solar flux index used when nothing better is known
pub const DEFAULT_SFI: u32 = 130;
/// K-index used when nothing better is known
pub const DEFAULT_KINDEX: u8 = 3;
/// A-index used when nothing better is known
pub const DEFAULT_AINDEX: u32 = 10;
/// Upper end of the K-index scale
pub const MAX_KINDEX: u8 = 9;

/// Where a snapshot came from, in decreasing order of trust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarSource {
    Online,
    Cache,
    User,
    Default,
}

impl fmt::Display for SolarSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolarSource::Online => "online",
            SolarSource::Cache => "cache",
            SolarSource::User => "user",
            SolarSource::Default => "default",
        };
        f.write_str(name)
    }
}

/// Current space-weather indices as persisted in the snapshot cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSnapshot {
    /// Sunspot number
    pub ssn: u32,
    /// Solar flux index (10.7 cm)
    pub sfi: u32,
    /// Planetary K-index, 0-9
    pub kindex: u8,
    /// Planetary A-index
    pub aindex: u32,
    /// When the values were obtained, epoch seconds
    pub timestamp: i64,
    pub source: SolarSource,
    /// Free-text "updated" stamp as reported by the feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl SolarSnapshot {
    /// Synthesised low-confidence snapshot used when no data exists at all
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            ssn: DEFAULT_SSN,
            sfi: DEFAULT_SFI,
            kindex: DEFAULT_KINDEX,
            aindex: DEFAULT_AINDEX,
            timestamp: 0,
            source: SolarSource::Default,
            updated: None,
        }
    }

    /// Age of the snapshot in hours relative to `now`. Timestamps in the
    /// future count as zero age.
    #[must_use]
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        let seconds = (now.timestamp() - self.timestamp).max(0);
        seconds as f64 / 3600.0
    }

    #[must_use]
    pub fn with_source(mut self, source: SolarSource) -> Self {
        self.source = source;
        self
    }
}

/// Geomagnetic conditions derived from the K-index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeomagneticCondition {
    /// K 0-1
    Quiet,
    /// K 2-3
    Unsettled,
    /// K 4
    Active,
    /// K 5-6
    Storm,
    /// K 7-9
    SevereStorm,
}

impl GeomagneticCondition {
    #[must_use]
    pub fn from_kindex(kindex: u8) -> Self {
        match kindex {
            0..=1 => GeomagneticCondition::Quiet,
            2..=3 => GeomagneticCondition::Unsettled,
            4 => GeomagneticCondition::Active,
            5..=6 => GeomagneticCondition::Storm,
            _ => GeomagneticCondition::SevereStorm,
        }
    }
}

impl fmt::Display for GeomagneticCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GeomagneticCondition::Quiet => "Quiet",
            GeomagneticCondition::Unsettled => "Unsettled",
            GeomagneticCondition::Active => "Active",
            GeomagneticCondition::Storm => "Storm",
            GeomagneticCondition::SevereStorm => "Severe storm",
        };
        f.write_str(text)
    }
}

/// Solar activity level derived from the solar flux index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolarActivity {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl SolarActivity {
    #[must_use]
    pub fn from_sfi(sfi: u32) -> Self {
        match sfi {
            0..80 => SolarActivity::VeryLow,
            80..100 => SolarActivity::Low,
            100..150 => SolarActivity::Moderate,
            150..200 => SolarActivity::High,
            _ => SolarActivity::VeryHigh,
        }
    }
}

impl fmt::Display for SolarActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SolarActivity::VeryLow => "Very low",
            SolarActivity::Low => "Low",
            SolarActivity::Moderate => "Moderate",
            SolarActivity::High => "High",
            SolarActivity::VeryHigh => "Very high",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = SolarSnapshot {
            ssn: 87,
            sfi: 142,
            kindex: 2,
            aindex: 7,
            timestamp: 1_760_000_000,
            source: SolarSource::Online,
            updated: Some("18 Oct 2026 1200 GMT".to_string()),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["source"], "online");
        assert_eq!(json["kindex"], 2);

        let back: SolarSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_updated_is_optional() {
        let json = r#"{"ssn":50,"sfi":90,"kindex":1,"aindex":4,"timestamp":0,"source":"user"}"#;
        let snapshot: SolarSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.source, SolarSource::User);
        assert!(snapshot.updated.is_none());
    }

    #[test]
    fn test_age_hours() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let snapshot = SolarSnapshot {
            timestamp: now.timestamp() - 90 * 60,
            ..SolarSnapshot::defaults()
        };
        assert!((snapshot.age_hours(now) - 1.5).abs() < 1e-9);

        let future = SolarSnapshot {
            timestamp: now.timestamp() + 3600,
            ..SolarSnapshot::defaults()
        };
        assert_eq!(future.age_hours(now), 0.0);
    }

    #[rstest]
    #[case(0, GeomagneticCondition::Quiet)]
    #[case(3, GeomagneticCondition::Unsettled)]
    #[case(4, GeomagneticCondition::Active)]
    #[case(6, GeomagneticCondition::Storm)]
    #[case(9, GeomagneticCondition::SevereStorm)]
    fn test_geomagnetic_condition(#[case] kindex: u8, #[case] expected: GeomagneticCondition) {
        assert_eq!(GeomagneticCondition::from_kindex(kindex), expected);
    }

    #[rstest]
    #[case(70, SolarActivity::VeryLow)]
    #[case(99, SolarActivity::Low)]
    #[case(130, SolarActivity::Moderate)]
    #[case(180, SolarActivity::High)]
    #[case(250, SolarActivity::VeryHigh)]
    fn test_solar_activity(#[case] sfi: u32, #[case] expected: SolarActivity) {
        assert_eq!(SolarActivity::from_sfi(sfi), expected);
    }
}
