//! Best operating hours for a band

use super::muf::estimate_muf;
use crate::models::BestHours;

/// Path length used when scanning the day
pub const REFERENCE_DISTANCE_KM: f64 = 2000.0;
/// An hour counts as open when the frequency is at most this share of the MUF
const USABLE_MUF_RATIO: f64 = 0.95;

/// Scan all 24 UTC hours at the reference distance.
///
/// Returns the earliest and latest open hour, not the longest contiguous
/// run: a band open only around midnight UTC reports a window spanning
/// most of the day.
#[must_use]
pub fn estimate_best_hours(freq_mhz: f64, ssn: u32, lat_mid: f64, month: u32) -> BestHours {
    let open: Vec<u8> = (0..24u8)
        .filter(|&hour| {
            let muf = estimate_muf(ssn, REFERENCE_DISTANCE_KM, lat_mid, u32::from(hour), month);
            freq_mhz <= USABLE_MUF_RATIO * muf
        })
        .collect();

    match (open.first(), open.last()) {
        _ if open.len() == 24 => BestHours::AllDay,
        (Some(&start), Some(&end)) => BestHours::Window { start, end },
        _ => BestHours::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_band_open_all_day() {
        assert_eq!(estimate_best_hours(3.6, 20, 40.0, 6), BestHours::AllDay);
    }

    #[test]
    fn test_daytime_window() {
        assert_eq!(
            estimate_best_hours(7.1, 20, 40.0, 6),
            BestHours::Window { start: 11, end: 20 }
        );
    }

    #[test]
    fn test_high_band_closed_at_low_ssn() {
        assert_eq!(estimate_best_hours(28.3, 20, 40.0, 6), BestHours::Closed);
    }

    #[test]
    fn test_window_is_min_max_not_contiguous() {
        // Only 09 UTC is closed (early local morning dips below the night
        // floor), yet the reported window covers the whole day
        let hours = estimate_best_hours(18.1, 150, 40.0, 3);
        assert_eq!(hours, BestHours::Window { start: 0, end: 23 });
    }
}
