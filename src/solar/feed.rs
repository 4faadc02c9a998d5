//! Space-weather feed client
//!
//! Fetches the HamQSL solar XML document with a single bounded request.
//! Individual fields that are missing or unparseable fall back to the
//! documented defaults; only transport and document-level failures are
//! reported as errors.

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::models::solar::{DEFAULT_AINDEX, DEFAULT_KINDEX, DEFAULT_SFI, DEFAULT_SSN, MAX_KINDEX};
use crate::models::{SolarSnapshot, SolarSource};
use crate::{HfPropError, Result};

/// A source of current space-weather indices
pub trait SpaceWeatherFeed {
    fn fetch(&self) -> Result<SolarSnapshot>;
}

/// `<solar><solardata>...</solardata></solar>`
#[derive(Debug, Deserialize)]
struct SolarDocument {
    solardata: SolarData,
}

#[derive(Debug, Default, Deserialize)]
struct SolarData {
    #[serde(default)]
    updated: Option<String>,
    #[serde(default)]
    solarflux: Option<String>,
    #[serde(default)]
    aindex: Option<String>,
    #[serde(default)]
    kindex: Option<String>,
    #[serde(default)]
    sunspots: Option<String>,
}

/// HTTPS client for the HamQSL solar feed
pub struct HamQslFeed {
    client: Client,
    url: String,
}

impl HamQslFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hfprop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HfPropError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SpaceWeatherFeed for HamQslFeed {
    #[instrument(name = "fetch_solar_feed", skip(self), fields(url = %self.url))]
    fn fetch(&self) -> Result<SolarSnapshot> {
        debug!("Requesting solar data");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| HfPropError::network(format!("Solar feed request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HfPropError::network(format!(
                "Solar feed returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| HfPropError::network(format!("Failed to read solar feed body: {e}")))?;

        let snapshot = parse_solar_xml(&body, Utc::now())?;
        info!(
            ssn = snapshot.ssn,
            sfi = snapshot.sfi,
            kindex = snapshot.kindex,
            "Fetched solar data"
        );
        Ok(snapshot)
    }
}

/// Parse a feed document into an online snapshot stamped with `fetched_at`
pub fn parse_solar_xml(xml: &str, fetched_at: DateTime<Utc>) -> Result<SolarSnapshot> {
    let document: SolarDocument = quick_xml::de::from_str(xml)
        .map_err(|e| HfPropError::parse(format!("Failed to parse solar XML: {e}")))?;
    let data = document.solardata;

    let kindex = parse_index(data.kindex.as_deref(), "kindex")
        .map_or(DEFAULT_KINDEX, |k| k.min(u32::from(MAX_KINDEX)) as u8);

    Ok(SolarSnapshot {
        ssn: parse_index(data.sunspots.as_deref(), "sunspots").unwrap_or(DEFAULT_SSN),
        sfi: parse_index(data.solarflux.as_deref(), "solarflux").unwrap_or(DEFAULT_SFI),
        kindex,
        aindex: parse_index(data.aindex.as_deref(), "aindex").unwrap_or(DEFAULT_AINDEX),
        timestamp: fetched_at.timestamp(),
        source: SolarSource::Online,
        updated: data
            .updated
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty()),
    })
}

fn parse_index(raw: Option<&str>, field: &str) -> Option<u32> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        debug!("Solar field '{}' missing, using default", field);
        return None;
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.round() as u32),
        _ => {
            warn!("Solar field '{}' unparseable ('{}'), using default", field, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FEED_SAMPLE: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<solar>
  <solardata>
    <source url="http://www.hamqsl.com/solar.html">N0NBH</source>
    <updated> 18 Oct 2026 1200 GMT</updated>
    <solarflux> 142</solarflux>
    <aindex> 7</aindex>
    <kindex> 2</kindex>
    <xray>B6.2</xray>
    <sunspots>87</sunspots>
    <calculatedconditions>
      <band name="80m-40m" time="day">Fair</band>
    </calculatedconditions>
  </solardata>
</solar>"#;

    fn fetched_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 5, 0).unwrap()
    }

    #[test]
    fn test_parse_full_document() {
        let snapshot = parse_solar_xml(FEED_SAMPLE, fetched_at()).unwrap();

        assert_eq!(snapshot.ssn, 87);
        assert_eq!(snapshot.sfi, 142);
        assert_eq!(snapshot.kindex, 2);
        assert_eq!(snapshot.aindex, 7);
        assert_eq!(snapshot.source, SolarSource::Online);
        assert_eq!(snapshot.timestamp, fetched_at().timestamp());
        assert_eq!(snapshot.updated.as_deref(), Some("18 Oct 2026 1200 GMT"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let xml = "<solar><solardata><sunspots>55</sunspots></solardata></solar>";
        let snapshot = parse_solar_xml(xml, fetched_at()).unwrap();

        assert_eq!(snapshot.ssn, 55);
        assert_eq!(snapshot.sfi, DEFAULT_SFI);
        assert_eq!(snapshot.kindex, DEFAULT_KINDEX);
        assert_eq!(snapshot.aindex, DEFAULT_AINDEX);
        assert!(snapshot.updated.is_none());
    }

    #[test]
    fn test_garbage_fields_use_defaults() {
        let xml = "<solar><solardata><sunspots>n/a</sunspots><kindex>-1</kindex>\
                   <solarflux>123.6</solarflux></solardata></solar>";
        let snapshot = parse_solar_xml(xml, fetched_at()).unwrap();

        assert_eq!(snapshot.ssn, DEFAULT_SSN);
        assert_eq!(snapshot.kindex, DEFAULT_KINDEX);
        assert_eq!(snapshot.sfi, 124);
    }

    #[test]
    fn test_kindex_clamped() {
        let xml = "<solar><solardata><kindex>12</kindex></solardata></solar>";
        let snapshot = parse_solar_xml(xml, fetched_at()).unwrap();
        assert_eq!(snapshot.kindex, 9);
    }

    #[test]
    fn test_not_a_solar_document() {
        assert!(parse_solar_xml("<html><body>maintenance</body></html>", fetched_at()).is_err());
        assert!(parse_solar_xml("not xml at all", fetched_at()).is_err());
    }
}
