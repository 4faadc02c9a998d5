//! Solar data fallback chain against substitute feeds, stores and prompters

use chrono::{DateTime, Duration, TimeZone, Utc};
use hfprop::models::{SolarSnapshot, SolarSource};
use hfprop::solar::{
    Action, JsonFileStore, MemoryStore, ScriptedPrompter, SnapshotStore, SolarDataProvider,
    SpaceWeatherFeed, parse_solar_xml,
};
use hfprop::{HfPropError, Result};
use std::fs;
use tempfile::TempDir;

struct OfflineFeed;

impl SpaceWeatherFeed for OfflineFeed {
    fn fetch(&self) -> Result<SolarSnapshot> {
        Err(HfPropError::network("operation timed out"))
    }
}

/// Serves a fixed XML document, as the real feed would
struct XmlFeed {
    body: &'static str,
    fetched_at: DateTime<Utc>,
}

impl SpaceWeatherFeed for XmlFeed {
    fn fetch(&self) -> Result<SolarSnapshot> {
        parse_solar_xml(self.body, self.fetched_at)
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 18, 30, 0).unwrap()
}

fn cached(age: Duration) -> SolarSnapshot {
    SolarSnapshot {
        ssn: 73,
        sfi: 121,
        kindex: 2,
        aindex: 8,
        timestamp: (now() - age).timestamp(),
        source: SolarSource::Online,
        updated: Some("earlier".to_string()),
    }
}

#[test]
fn test_just_under_a_day_uses_cache_without_prompting() {
    let original = cached(Duration::hours(23) + Duration::minutes(59));
    let store = MemoryStore::with_snapshot(original.clone());
    let prompter = ScriptedPrompter::new(["999"]);

    let acquisition = SolarDataProvider::new(&OfflineFeed, &store)
        .with_prompter(&prompter)
        .acquire_at(now());

    assert_eq!(acquisition.action, Action::UseCache);
    assert_eq!(acquisition.snapshot.source, SolarSource::Cache);
    assert_eq!(acquisition.snapshot, original.with_source(SolarSource::Cache));
    assert!(acquisition.warning.is_none());
    assert!(!acquisition.is_authoritative());
    assert!(prompter.questions().is_empty());
}

#[test]
fn test_ten_day_old_cache_non_interactive() {
    let original = cached(Duration::days(10));
    let store = MemoryStore::with_snapshot(original.clone());

    let acquisition = SolarDataProvider::new(&OfflineFeed, &store).acquire_at(now());

    assert_eq!(acquisition.snapshot, original);
    assert_eq!(acquisition.snapshot.source, SolarSource::Online);
    let warning = acquisition.warning.unwrap();
    assert!(warning.contains("very stale"), "{warning}");
    assert!(!acquisition.status.is_empty());
}

#[test]
fn test_no_cache_non_interactive_synthesises_defaults() {
    let store = MemoryStore::new();
    let acquisition = SolarDataProvider::new(&OfflineFeed, &store).acquire_at(now());

    let snapshot = acquisition.snapshot;
    assert_eq!(snapshot.source, SolarSource::Default);
    assert_eq!((snapshot.ssn, snapshot.sfi, snapshot.kindex, snapshot.aindex), (100, 130, 3, 10));
    assert_eq!(snapshot.timestamp, 0);
    assert!(acquisition.warning.is_some());
}

#[test]
fn test_online_fetch_refreshes_file_cache() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("hfprop").join("solar.json"));
    assert!(store.save(&cached(Duration::days(3))));

    let feed = XmlFeed {
        body: "<solar><solardata><updated>18 Oct 2026 1800 GMT</updated>\
               <solarflux>171</solarflux><aindex>5</aindex><kindex>1</kindex>\
               <sunspots>132</sunspots></solardata></solar>",
        fetched_at: now(),
    };
    let acquisition = SolarDataProvider::new(&feed, &store).acquire_at(now());

    assert_eq!(acquisition.action, Action::UseFresh);
    assert!(acquisition.is_authoritative());
    assert!(acquisition.status.contains("18 Oct 2026 1800 GMT"));

    let persisted = store.load().unwrap();
    assert_eq!(persisted.ssn, 132);
    assert_eq!(persisted.sfi, 171);
    assert_eq!(persisted.timestamp, now().timestamp());
}

#[test]
fn test_malformed_cache_file_counts_as_missing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("solar.json");
    fs::write(&path, "ssn=100").unwrap();
    let store = JsonFileStore::new(&path);
    let prompter = ScriptedPrompter::new(["", ""]);

    let acquisition = SolarDataProvider::new(&OfflineFeed, &store)
        .with_prompter(&prompter)
        .acquire_at(now());

    // Both values requested because there was nothing to carry over
    assert_eq!(acquisition.action, Action::RequestInput { ask_sfi: true });
    assert_eq!(prompter.questions().len(), 2);
    assert_eq!(acquisition.snapshot.source, SolarSource::User);
    assert_eq!(store.load().unwrap().ssn, 100);
}

#[test]
fn test_user_override_survives_next_session() {
    let store = MemoryStore::with_snapshot(cached(Duration::hours(60)));
    let prompter = ScriptedPrompter::new(["41"]);
    let first = SolarDataProvider::new(&OfflineFeed, &store)
        .with_prompter(&prompter)
        .acquire_at(now());
    assert_eq!(first.snapshot.source, SolarSource::User);

    // An hour later the confirmed value is fresh cache
    let second = SolarDataProvider::new(&OfflineFeed, &store).acquire_at(now() + Duration::hours(1));
    assert_eq!(second.action, Action::UseCache);
    assert_eq!(second.snapshot.ssn, 41);
    assert_eq!(second.snapshot.source, SolarSource::Cache);
    assert!(second.warning.is_none());
    assert!(!second.is_authoritative());
}
