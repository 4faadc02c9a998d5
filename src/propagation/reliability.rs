//! Reliability score for one frequency on one path

/// Score from 0 to 100 for operating at `freq_mhz` on a path with the given
/// MUF, length and geomagnetic K-index. Anything above the MUF scores 0.
#[must_use]
pub fn estimate_reliability(freq_mhz: f64, muf_mhz: f64, distance_km: f64, kindex: u8) -> u8 {
    if muf_mhz <= 0.0 || freq_mhz > muf_mhz {
        return 0;
    }

    let score = ratio_score(freq_mhz / muf_mhz) - distance_penalty(distance_km) - storm_penalty(kindex);
    score.clamp(0, 100) as u8
}

/// Close to the MUF the path is marginal; the FOT region scores highest
fn ratio_score(ratio: f64) -> i32 {
    match ratio {
        r if r > 0.95 => 40,
        r if r > 0.85 => 95,
        r if r > 0.70 => 90,
        r if r > 0.50 => 80,
        r if r > 0.30 => 70,
        _ => 60,
    }
}

fn distance_penalty(distance_km: f64) -> i32 {
    match distance_km {
        d if d > 10_000.0 => 15,
        d if d > 5000.0 => 10,
        d if d > 2500.0 => 5,
        _ => 0,
    }
}

fn storm_penalty(kindex: u8) -> i32 {
    match kindex {
        7.. => 40,
        5..=6 => 25,
        4 => 10,
        _ => 0,
    }
}
