//! Pure decision logic for the solar data fallback chain
//!
//! The provider gathers facts (did the fetch succeed, how old is the cache,
//! can we ask the user) and this module turns them into a single action.
//! Rules are tried in order and the first one that applies wins.

use std::fmt;

/// Cache younger than this is used without comment
pub const FRESH_LIMIT_HOURS: f64 = 24.0;
/// Cache at least this old is considered very stale
pub const STALE_LIMIT_HOURS: f64 = 7.0 * 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    Interactive,
    NonInteractive,
}

/// Facts available after the network attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Situation {
    pub fetched: bool,
    /// `None` when there is no usable cached snapshot
    pub cache_age_hours: Option<f64>,
    pub mode: AcquisitionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Use the snapshot just fetched
    UseFresh,
    /// Cache is younger than a day
    UseCache,
    /// Stale cache, nobody to ask: use it with a mild warning
    UseStale,
    /// Stale cache, offer the user a chance to override the sunspot number
    ConfirmStale,
    /// Very stale cache, nobody to ask: keep it with a strong warning
    UseVeryStale,
    /// Very stale or missing cache: ask for values. SFI is only asked
    /// for when there is no cached value to carry over.
    RequestInput { ask_sfi: bool },
    /// No cache, nobody to ask
    UseDefault,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::UseFresh => "use-fresh",
            Action::UseCache => "use-cache",
            Action::UseStale => "use-stale",
            Action::ConfirmStale => "confirm-stale",
            Action::UseVeryStale => "use-very-stale",
            Action::RequestInput { .. } => "need-input",
            Action::UseDefault => "use-default",
        };
        f.write_str(text)
    }
}

type Rule = fn(&Situation) -> Option<Action>;

const RULES: &[Rule] = &[online, fresh_cache, stale_cache, very_stale_cache, no_cache];

/// Choose what the provider should do
#[must_use]
pub fn decide(situation: &Situation) -> Action {
    RULES
        .iter()
        .find_map(|rule| rule(situation))
        .unwrap_or(Action::UseDefault)
}

fn online(situation: &Situation) -> Option<Action> {
    situation.fetched.then_some(Action::UseFresh)
}

fn fresh_cache(situation: &Situation) -> Option<Action> {
    let age = situation.cache_age_hours?;
    (age < FRESH_LIMIT_HOURS).then_some(Action::UseCache)
}

fn stale_cache(situation: &Situation) -> Option<Action> {
    let age = situation.cache_age_hours?;
    if age >= STALE_LIMIT_HOURS {
        return None;
    }
    Some(match situation.mode {
        AcquisitionMode::Interactive => Action::ConfirmStale,
        AcquisitionMode::NonInteractive => Action::UseStale,
    })
}

fn very_stale_cache(situation: &Situation) -> Option<Action> {
    situation.cache_age_hours.map(|_| match situation.mode {
        AcquisitionMode::Interactive => Action::RequestInput { ask_sfi: false },
        AcquisitionMode::NonInteractive => Action::UseVeryStale,
    })
}

fn no_cache(situation: &Situation) -> Option<Action> {
    Some(match situation.mode {
        AcquisitionMode::Interactive => Action::RequestInput { ask_sfi: true },
        AcquisitionMode::NonInteractive => Action::UseDefault,
    })
}
