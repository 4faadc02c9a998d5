//! Empirical maximum usable frequency estimate
//!
//! The critical frequency is a sunspot-driven base scaled by latitude,
//! local time and season. The path MUF multiplies it by an oblique-incidence
//! factor that grows with hop length. This is a rough approximation, not a
//! ray-tracing model.

/// Critical frequency ceiling in MHz
const MAX_BASE_FOF2_MHZ: f64 = 15.0;
/// No path MUF is reported below this
const MIN_MUF_MHZ: f64 = 3.0;
const MAX_OBLIQUE_FACTOR: f64 = 3.5;
/// Hops shorter than this are treated as near-vertical incidence
const NVIS_HOP_KM: f64 = 500.0;

/// FOT as a fraction of MUF
pub const FOT_RATIO: f64 = 0.85;

/// Number of F2 hops needed to cover `distance_km`
#[must_use]
pub fn estimate_hops(distance_km: f64) -> u32 {
    match distance_km {
        d if d < 2500.0 => 1,
        d if d < 5000.0 => 2,
        d if d < 7500.0 => 3,
        _ => 4,
    }
}

/// Path MUF in MHz.
///
/// `lat_mid` is the path midpoint latitude, `hour_utc` is 0-23 and
/// `month` is 1-12.
#[must_use]
pub fn estimate_muf(ssn: u32, distance_km: f64, lat_mid: f64, hour_utc: u32, month: u32) -> f64 {
    let base = (4.0 + 0.067 * f64::from(ssn)).min(MAX_BASE_FOF2_MHZ);
    let critical = base
        * latitude_factor(lat_mid)
        * diurnal_factor(hour_utc, lat_mid)
        * seasonal_factor(lat_mid, month);

    (critical * oblique_factor(distance_km)).max(MIN_MUF_MHZ)
}

/// Frequency of optimum traffic for a given MUF
#[must_use]
pub fn estimate_fot(muf_mhz: f64) -> f64 {
    muf_mhz * FOT_RATIO
}

fn latitude_factor(lat_mid: f64) -> f64 {
    let lat = lat_mid.abs();
    if lat < 20.0 {
        0.85
    } else if lat < 60.0 {
        1.0 + 0.15 * (2.0 * (lat - 40.0)).to_radians().cos()
    } else {
        0.7
    }
}

fn diurnal_factor(hour_utc: u32, lat_mid: f64) -> f64 {
    // Solar time is approximated from the midpoint latitude
    let local_hour = (f64::from(hour_utc) - lat_mid / 15.0).rem_euclid(24.0);
    if (6.0..=18.0).contains(&local_hour) {
        0.6 + 0.4 * ((local_hour - 14.0) * 15.0).to_radians().cos()
    } else {
        0.5
    }
}

fn seasonal_factor(lat_mid: f64, month: u32) -> f64 {
    let winter_month: i32 = if lat_mid > 0.0 { 1 } else { 7 };
    let diff = (month as i32 - winter_month).rem_euclid(12);
    let months_from_winter = diff.min(12 - diff);
    1.0 + 0.15 * (f64::from(months_from_winter) * 30.0).to_radians().cos()
}

fn oblique_factor(distance_km: f64) -> f64 {
    let hop_km = distance_km / f64::from(estimate_hops(distance_km));
    let factor = if hop_km < NVIS_HOP_KM {
        1.0 + hop_km / 1000.0
    } else {
        1.5 + hop_km / 2000.0
    };
    factor.min(MAX_OBLIQUE_FACTOR)
}
