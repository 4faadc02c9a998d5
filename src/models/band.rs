//! Band prediction model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative rating derived from a reliability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliabilityLabel {
    /// Reliability >= 80
    Excellent,
    /// Reliability >= 60
    Good,
    /// Reliability >= 40
    Fair,
    /// Reliability > 0
    Poor,
    /// Reliability == 0
    Closed,
}

impl ReliabilityLabel {
    #[must_use]
    pub fn from_reliability(reliability: u8) -> Self {
        match reliability {
            80.. => ReliabilityLabel::Excellent,
            60..80 => ReliabilityLabel::Good,
            40..60 => ReliabilityLabel::Fair,
            1..40 => ReliabilityLabel::Poor,
            0 => ReliabilityLabel::Closed,
        }
    }
}

impl fmt::Display for ReliabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ReliabilityLabel::Excellent => "Excellent",
            ReliabilityLabel::Good => "Good",
            ReliabilityLabel::Fair => "Fair",
            ReliabilityLabel::Poor => "Poor",
            ReliabilityLabel::Closed => "Closed",
        };
        f.write_str(text)
    }
}

/// UTC hours during which a band is expected to be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestHours {
    /// No hour of the day is usable
    Closed,
    /// Every hour of the day is usable
    AllDay,
    /// Earliest and latest usable UTC hour. The hours in between are not
    /// guaranteed to be usable.
    Window { start: u8, end: u8 },
}

impl BestHours {
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, BestHours::Closed)
    }
}

impl fmt::Display for BestHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BestHours::Closed => f.write_str("Closed"),
            BestHours::AllDay => f.write_str("All day"),
            BestHours::Window { start, end } => write!(f, "{start:02}-{end:02} UTC"),
        }
    }
}

/// Predicted conditions for one amateur band on one path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPrediction {
    /// Band identifier, e.g. "20m"
    pub band: String,
    /// Representative frequency in MHz
    pub frequency_mhz: f64,
    /// Frequency as a percentage of the path MUF, 0-100
    pub muf_pct: u8,
    /// Reliability score, 0-100
    pub reliability: u8,
    pub label: ReliabilityLabel,
    pub best_hours: BestHours,
    pub usable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, ReliabilityLabel::Excellent)]
    #[case(80, ReliabilityLabel::Excellent)]
    #[case(79, ReliabilityLabel::Good)]
    #[case(60, ReliabilityLabel::Good)]
    #[case(40, ReliabilityLabel::Fair)]
    #[case(39, ReliabilityLabel::Poor)]
    #[case(1, ReliabilityLabel::Poor)]
    #[case(0, ReliabilityLabel::Closed)]
    fn test_label_thresholds(#[case] reliability: u8, #[case] expected: ReliabilityLabel) {
        assert_eq!(ReliabilityLabel::from_reliability(reliability), expected);
    }

    #[test]
    fn test_best_hours_display() {
        assert_eq!(BestHours::Closed.to_string(), "Closed");
        assert_eq!(BestHours::AllDay.to_string(), "All day");
        assert_eq!(BestHours::Window { start: 7, end: 21 }.to_string(), "07-21 UTC");
    }
}
