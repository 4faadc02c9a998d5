//! Plain-text rendering of a propagation forecast

use crate::geo::{format_bearing, format_distance};
use crate::models::{GeomagneticCondition, LocationResult, SolarActivity};
use crate::propagation::{Forecast, PathGeometry};
use crate::solar::Acquisition;

/// Everything shown for one prediction request
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub from: &'a LocationResult,
    pub to: &'a LocationResult,
    pub path: &'a PathGeometry,
    pub solar: &'a Acquisition,
    pub forecast: &'a Forecast,
    pub hour_utc: u32,
    pub month: u32,
}

#[must_use]
pub fn render_report(report: &Report<'_>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "HF propagation: {} -> {}",
        report.from.description, report.to.description
    ));
    lines.push(format!(
        "Time: {:02}:00 UTC, month {}",
        report.hour_utc, report.month
    ));
    lines.push(String::new());

    lines.extend(path_section(report.path));
    lines.push(String::new());
    lines.extend(solar_section(report.solar));
    lines.push(String::new());

    lines.push(format!(
        "MUF {:.1} MHz, FOT {:.1} MHz",
        report.forecast.muf_mhz, report.forecast.fot_mhz
    ));
    lines.push(format!(
        "{:<5} {:>8} {:>6} {:>6}  {:<10} {}",
        "Band", "MHz", "MUF%", "Rel%", "Rating", "Best hours"
    ));
    for p in &report.forecast.predictions {
        lines.push(format!(
            "{:<5} {:>8.3} {:>6} {:>6}  {:<10} {}",
            p.band,
            p.frequency_mhz,
            p.muf_pct,
            p.reliability,
            p.label.to_string(),
            p.best_hours
        ));
    }
    lines.push(String::new());
    lines.push(format!("Recommendation: {}", report.forecast.recommendation));

    if let Some(warning) = &report.solar.warning {
        lines.push(format!("Warning: {warning}"));
    }

    lines.join("\n")
}

fn path_section(path: &PathGeometry) -> Vec<String> {
    vec![
        format!("Distance: {}", format_distance(path.distance_km)),
        format!(
            "Bearing: {} (return {})",
            format_bearing(path.bearing_deg),
            format_bearing(path.reverse_bearing_deg)
        ),
        format!(
            "Long path: {} at {}",
            format_distance(path.long_path_km),
            format_bearing(path.long_path_bearing_deg())
        ),
        format!(
            "Midpoint: {} ({} hop{})",
            path.midpoint.format_coordinates(),
            path.hops,
            if path.hops == 1 { "" } else { "s" }
        ),
    ]
}

fn solar_section(solar: &Acquisition) -> Vec<String> {
    let s = &solar.snapshot;
    vec![
        format!("Solar data: {}", solar.status),
        format!(
            "SSN {}, SFI {} ({}), K {} / A {} ({})",
            s.ssn,
            s.sfi,
            SolarActivity::from_sfi(s.sfi),
            s.kindex,
            s.aindex,
            GeomagneticCondition::from_kindex(s.kindex)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, SolarSnapshot};
    use crate::propagation::{BandPlan, PropagationModel};
    use crate::solar::Action;

    #[test]
    fn test_render_contains_all_sections() {
        let from = LocationResult::new(Coordinate::new(43.5, -71.0).unwrap(), "FN43");
        let to = LocationResult::new(Coordinate::new(51.5, 1.0).unwrap(), "JO01");
        let path = PathGeometry::between(&from.coordinate, &to.coordinate);
        let solar = Acquisition {
            snapshot: SolarSnapshot::defaults(),
            status: "Built-in defaults".to_string(),
            warning: Some("No solar data available".to_string()),
            action: Action::UseDefault,
        };
        let forecast =
            PropagationModel::new(BandPlan::hf_amateur()).forecast(&path, &solar.snapshot, 15, 10);

        let text = render_report(&Report {
            from: &from,
            to: &to,
            path: &path,
            solar: &solar,
            forecast: &forecast,
            hour_utc: 15,
            month: 10,
        });

        assert!(text.starts_with("HF propagation: FN43 -> JO01"));
        assert!(text.contains("(NE)"));
        assert!(text.contains("3 hops"));
        assert!(text.contains("SSN 100, SFI 130 (Moderate), K 3 / A 10 (Unsettled)"));
        assert!(text.contains("Recommendation:"));
        assert!(text.contains("Warning: No solar data available"));
        for band in ["80m", "40m", "30m", "20m", "17m", "15m", "12m", "10m"] {
            assert!(text.contains(band), "{band} missing");
        }
    }
}
