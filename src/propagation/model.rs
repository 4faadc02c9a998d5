//! Per-band predictions and band ranking

use std::fmt;
use tracing::{debug, instrument};

use super::bands::{Band, BandPlan};
use super::hours::estimate_best_hours;
use super::muf::{estimate_fot, estimate_muf};
use super::path::PathGeometry;
use super::reliability::estimate_reliability;
use crate::models::{BandPrediction, ReliabilityLabel, SolarSnapshot};

/// Outcome of ranking a set of predictions
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Band(BandPrediction),
    NoBandsOpen,
}

impl Recommendation {
    #[must_use]
    pub fn band(&self) -> Option<&BandPrediction> {
        match self {
            Recommendation::Band(prediction) => Some(prediction),
            Recommendation::NoBandsOpen => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Band(p) => write!(
                f,
                "{} ({:.1} MHz), {} reliability {}%, best {}",
                p.band, p.frequency_mhz, p.label, p.reliability, p.best_hours
            ),
            Recommendation::NoBandsOpen => f.write_str("No bands open on this path right now"),
        }
    }
}

/// Everything computed for one path at one time
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub muf_mhz: f64,
    pub fot_mhz: f64,
    pub predictions: Vec<BandPrediction>,
    pub recommendation: Recommendation,
}

/// Stateless propagation model over a fixed band plan
#[derive(Debug, Clone, Default)]
pub struct PropagationModel {
    plan: BandPlan,
}

impl PropagationModel {
    #[must_use]
    pub fn new(plan: BandPlan) -> Self {
        Self { plan }
    }

    #[must_use]
    pub fn plan(&self) -> &BandPlan {
        &self.plan
    }

    /// Predict every band in the plan for one path and time
    #[must_use]
    pub fn predict_bands(
        &self,
        distance_km: f64,
        lat_mid: f64,
        ssn: u32,
        kindex: u8,
        hour_utc: u32,
        month: u32,
    ) -> Vec<BandPrediction> {
        let muf = estimate_muf(ssn, distance_km, lat_mid, hour_utc, month);
        debug!(muf, distance_km, lat_mid, "Path MUF estimated");

        self.plan
            .bands()
            .iter()
            .map(|band| predict_band(band, muf, distance_km, lat_mid, ssn, kindex, month))
            .collect()
    }

    /// Pick the most reliable open band; ties go to the higher frequency
    #[must_use]
    pub fn get_recommendation(&self, predictions: &[BandPrediction]) -> Recommendation {
        predictions
            .iter()
            .filter(|p| p.usable)
            .max_by(|a, b| {
                a.reliability
                    .cmp(&b.reliability)
                    .then(a.frequency_mhz.total_cmp(&b.frequency_mhz))
            })
            .cloned()
            .map_or(Recommendation::NoBandsOpen, Recommendation::Band)
    }

    /// MUF, FOT, band predictions and recommendation for a path
    #[instrument(level = "debug", skip(self, path, solar), fields(distance_km = path.distance_km, ssn = solar.ssn))]
    pub fn forecast(
        &self,
        path: &PathGeometry,
        solar: &SolarSnapshot,
        hour_utc: u32,
        month: u32,
    ) -> Forecast {
        let lat_mid = path.midpoint.lat();
        let muf_mhz = estimate_muf(solar.ssn, path.distance_km, lat_mid, hour_utc, month);
        let predictions = self.predict_bands(
            path.distance_km,
            lat_mid,
            solar.ssn,
            solar.kindex,
            hour_utc,
            month,
        );
        let recommendation = self.get_recommendation(&predictions);

        Forecast {
            muf_mhz,
            fot_mhz: estimate_fot(muf_mhz),
            predictions,
            recommendation,
        }
    }
}

fn predict_band(
    band: &Band,
    muf: f64,
    distance_km: f64,
    lat_mid: f64,
    ssn: u32,
    kindex: u8,
    month: u32,
) -> BandPrediction {
    let freq = band.frequency_mhz;
    let best_hours = estimate_best_hours(freq, ssn, lat_mid, month);

    let (muf_pct, reliability) = if best_hours.is_closed() {
        (0, 0)
    } else {
        let pct = (100.0 * freq / muf).round().min(100.0) as u8;
        (pct, estimate_reliability(freq, muf, distance_km, kindex))
    };

    BandPrediction {
        band: band.name.clone(),
        frequency_mhz: freq,
        muf_pct,
        reliability,
        label: ReliabilityLabel::from_reliability(reliability),
        best_hours,
        usable: reliability > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BestHours;

    fn model() -> PropagationModel {
        PropagationModel::new(BandPlan::hf_amateur())
    }

    fn find<'a>(predictions: &'a [BandPrediction], band: &str) -> &'a BandPrediction {
        predictions.iter().find(|p| p.band == band).unwrap()
    }

    #[test]
    fn test_low_ssn_midday() {
        let predictions = model().predict_bands(1500.0, 40.0, 20, 2, 12, 6);
        assert_eq!(predictions.len(), 8);

        let p80 = find(&predictions, "80m");
        assert_eq!(p80.reliability, 70);
        assert_eq!(p80.label, ReliabilityLabel::Good);
        assert_eq!(p80.muf_pct, 41);
        assert_eq!(p80.best_hours, BestHours::AllDay);

        let p40 = find(&predictions, "40m");
        assert_eq!(p40.reliability, 90);
        assert_eq!(p40.label, ReliabilityLabel::Excellent);
        assert_eq!(p40.best_hours, BestHours::Window { start: 11, end: 20 });

        // Above the MUF but with open hours elsewhere in the day
        let p30 = find(&predictions, "30m");
        assert_eq!(p30.reliability, 0);
        assert_eq!(p30.muf_pct, 100);
        assert!(!p30.usable);

        for band in ["20m", "17m", "15m", "12m", "10m"] {
            let p = find(&predictions, band);
            assert_eq!(p.label, ReliabilityLabel::Closed, "{band}");
            assert_eq!(p.muf_pct, 0, "{band}");
            assert_eq!(p.best_hours, BestHours::Closed, "{band}");
        }

        let recommendation = model().get_recommendation(&predictions);
        assert_eq!(recommendation.band().unwrap().band, "40m");
    }

    #[test]
    fn test_long_evening_path() {
        let predictions = model().predict_bands(5000.0, 45.0, 20, 2, 18, 6);
        assert_eq!(find(&predictions, "80m").reliability, 55);
        assert_eq!(find(&predictions, "40m").reliability, 75);
        assert_eq!(find(&predictions, "30m").reliability, 85);

        let recommendation = model().get_recommendation(&predictions);
        assert_eq!(recommendation.band().unwrap().band, "30m");
    }

    #[test]
    fn test_tie_prefers_higher_band() {
        let predictions = model().predict_bands(2000.0, 40.0, 150, 2, 15, 3);
        // 15m, 12m and 10m all score 80
        let recommendation = model().get_recommendation(&predictions);
        assert_eq!(recommendation.band().unwrap().band, "10m");
    }

    #[test]
    fn test_no_bands_open() {
        let closed = BandPrediction {
            band: "10m".to_string(),
            frequency_mhz: 28.3,
            muf_pct: 0,
            reliability: 0,
            label: ReliabilityLabel::Closed,
            best_hours: BestHours::Closed,
            usable: false,
        };
        assert_eq!(model().get_recommendation(&[closed]), Recommendation::NoBandsOpen);
        assert_eq!(model().get_recommendation(&[]), Recommendation::NoBandsOpen);
        assert!(Recommendation::NoBandsOpen.to_string().contains("No bands open"));
    }

    #[test]
    fn test_forecast_reports_fot() {
        let path = PathGeometry {
            distance_km: 1500.0,
            bearing_deg: 90.0,
            reverse_bearing_deg: 270.0,
            long_path_km: 38_530.0,
            midpoint: crate::models::Coordinate::new(40.0, -50.0).unwrap(),
            hops: 1,
        };
        let solar = SolarSnapshot {
            ssn: 20,
            kindex: 2,
            ..SolarSnapshot::defaults()
        };

        let forecast = model().forecast(&path, &solar, 12, 6);
        assert!((forecast.muf_mhz - 8.86).abs() < 0.01);
        assert!((forecast.fot_mhz - forecast.muf_mhz * 0.85).abs() < 1e-9);
        assert_eq!(forecast.recommendation.band().unwrap().band, "40m");
    }
}
