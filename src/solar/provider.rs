//! Never-failing acquisition of space-weather indices
//!
//! One network attempt, then the persisted snapshot, then the user, then
//! built-in defaults. Which tier applies is decided by
//! [`policy::decide`](super::policy::decide); this module only carries the
//! action out and writes the status and warning texts.

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use super::feed::SpaceWeatherFeed;
use super::policy::{AcquisitionMode, Action, Situation, decide};
use super::prompt::{Prompter, ask_number};
use super::store::SnapshotStore;
use crate::models::solar::{DEFAULT_AINDEX, DEFAULT_KINDEX, DEFAULT_SFI, DEFAULT_SSN};
use crate::models::{SolarSnapshot, SolarSource};

/// Result of one acquisition: always a usable snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Acquisition {
    pub snapshot: SolarSnapshot,
    /// Short description of where the values came from
    pub status: String,
    /// Set whenever the values should not be fully trusted
    pub warning: Option<String>,
    pub action: Action,
}

impl Acquisition {
    /// Online data and values the user just confirmed count as current
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        self.warning.is_none()
            && matches!(
                self.snapshot.source,
                SolarSource::Online | SolarSource::User
            )
    }
}

pub struct SolarDataProvider<'a> {
    feed: &'a dyn SpaceWeatherFeed,
    store: &'a dyn SnapshotStore,
    prompter: Option<&'a dyn Prompter>,
}

impl<'a> SolarDataProvider<'a> {
    /// A provider that never asks the user anything
    pub fn new(feed: &'a dyn SpaceWeatherFeed, store: &'a dyn SnapshotStore) -> Self {
        Self {
            feed,
            store,
            prompter: None,
        }
    }

    /// Enable interactive fallbacks through `prompter`
    #[must_use]
    pub fn with_prompter(mut self, prompter: &'a dyn Prompter) -> Self {
        self.prompter = Some(prompter);
        self
    }

    #[must_use]
    pub fn mode(&self) -> AcquisitionMode {
        if self.prompter.is_some() {
            AcquisitionMode::Interactive
        } else {
            AcquisitionMode::NonInteractive
        }
    }

    pub fn acquire(&self) -> Acquisition {
        self.acquire_at(Utc::now())
    }

    /// Run the fallback chain with `now` as the reference time for cache age
    /// and for stamping user-entered values
    #[instrument(name = "acquire_solar", skip(self), fields(mode = ?self.mode()))]
    pub fn acquire_at(&self, now: DateTime<Utc>) -> Acquisition {
        let fetched = match self.feed.fetch() {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Solar feed unavailable: {}", e.user_message());
                None
            }
        };

        let cached = if fetched.is_none() {
            self.store.load()
        } else {
            None
        };

        let situation = Situation {
            fetched: fetched.is_some(),
            cache_age_hours: cached.as_ref().map(|c| c.age_hours(now)),
            mode: self.mode(),
        };
        let action = decide(&situation);
        info!(%action, age_hours = ?situation.cache_age_hours, "Solar data tier chosen");

        match (action, fetched, cached) {
            (Action::UseFresh, Some(snapshot), _) => self.use_fresh(snapshot),
            (Action::UseCache, _, Some(snapshot)) => use_cache(snapshot, now),
            (Action::UseStale, _, Some(snapshot)) => use_stale(snapshot, now, action),
            (Action::ConfirmStale, _, Some(snapshot)) => self.confirm_stale(snapshot, now),
            (Action::UseVeryStale, _, Some(snapshot)) => use_very_stale(snapshot, now),
            (Action::RequestInput { .. }, _, cached) => self.request_input(cached, now),
            _ => use_default(),
        }
    }

    fn persist(&self, snapshot: &SolarSnapshot) {
        if !self.store.save(snapshot) {
            warn!("Continuing without persisting solar snapshot");
        }
    }

    fn use_fresh(&self, snapshot: SolarSnapshot) -> Acquisition {
        self.persist(&snapshot);
        let status = match &snapshot.updated {
            Some(updated) => format!("Online (updated {updated})"),
            None => "Online".to_string(),
        };
        Acquisition {
            snapshot,
            status,
            warning: None,
            action: Action::UseFresh,
        }
    }

    fn confirm_stale(&self, snapshot: SolarSnapshot, now: DateTime<Utc>) -> Acquisition {
        let Some(prompter) = self.prompter else {
            return use_stale(snapshot, now, Action::ConfirmStale);
        };

        let question = format!(
            "Cached solar data is {:.0} hours old. Current sunspot number (blank keeps {})",
            snapshot.age_hours(now),
            snapshot.ssn
        );

        match ask_number(prompter, &question) {
            Some(ssn) => {
                let confirmed = SolarSnapshot {
                    ssn,
                    timestamp: now.timestamp(),
                    source: SolarSource::User,
                    updated: None,
                    ..snapshot
                };
                self.persist(&confirmed);
                Acquisition {
                    status: format!("User-confirmed (SSN {ssn})"),
                    snapshot: confirmed,
                    warning: None,
                    action: Action::ConfirmStale,
                }
            }
            None => use_stale(snapshot, now, Action::ConfirmStale),
        }
    }

    fn request_input(&self, cached: Option<SolarSnapshot>, now: DateTime<Utc>) -> Acquisition {
        let ask_sfi = cached.is_none();
        let action = Action::RequestInput { ask_sfi };
        let Some(prompter) = self.prompter else {
            return match cached {
                Some(snapshot) => use_very_stale(snapshot, now),
                None => use_default(),
            };
        };

        let ssn = ask_number(
            prompter,
            &format!("Sunspot number (blank for {DEFAULT_SSN})"),
        )
        .unwrap_or(DEFAULT_SSN);

        let sfi = match &cached {
            Some(snapshot) => snapshot.sfi,
            None => ask_number(
                prompter,
                &format!("Solar flux index (blank for {DEFAULT_SFI})"),
            )
            .unwrap_or(DEFAULT_SFI),
        };

        let (kindex, aindex) = cached
            .as_ref()
            .map_or((DEFAULT_KINDEX, DEFAULT_AINDEX), |s| (s.kindex, s.aindex));

        let snapshot = SolarSnapshot {
            ssn,
            sfi,
            kindex,
            aindex,
            timestamp: now.timestamp(),
            source: SolarSource::User,
            updated: None,
        };
        self.persist(&snapshot);

        let warning = if ask_sfi {
            "No solar data was available; predictions rely on manually entered values and are low confidence"
        } else {
            "Cached solar data was very stale; predictions rely on manually entered values and are low confidence"
        };

        Acquisition {
            status: format!("User-provided (SSN {ssn}, SFI {sfi})"),
            snapshot,
            warning: Some(warning.to_string()),
            action,
        }
    }
}

fn use_cache(snapshot: SolarSnapshot, now: DateTime<Utc>) -> Acquisition {
    Acquisition {
        status: format!("Cached ({:.1} hours old)", snapshot.age_hours(now)),
        snapshot: snapshot.with_source(SolarSource::Cache),
        warning: None,
        action: Action::UseCache,
    }
}

fn use_stale(snapshot: SolarSnapshot, now: DateTime<Utc>, action: Action) -> Acquisition {
    let age = snapshot.age_hours(now);
    Acquisition {
        status: format!("Cached ({age:.0} hours old)"),
        warning: Some(format!(
            "Solar data is {age:.0} hours old; predictions may be less accurate"
        )),
        snapshot,
        action,
    }
}

fn use_very_stale(snapshot: SolarSnapshot, now: DateTime<Utc>) -> Acquisition {
    let days = snapshot.age_hours(now) / 24.0;
    Acquisition {
        status: format!("Cached ({days:.1} days old)"),
        warning: Some(format!(
            "Solar data is very stale ({days:.1} days old); predictions are low confidence"
        )),
        snapshot,
        action: Action::UseVeryStale,
    }
}

fn use_default() -> Acquisition {
    Acquisition {
        snapshot: SolarSnapshot::defaults(),
        status: "Built-in defaults".to_string(),
        warning: Some(format!(
            "No solar data available; using defaults (SSN {DEFAULT_SSN}, SFI {DEFAULT_SFI}). \
             Predictions are low confidence"
        )),
        action: Action::UseDefault,
    }
}
