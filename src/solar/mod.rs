//! Space-weather acquisition
//!
//! - Feed: HTTPS client for the solar XML feed
//! - Store: persisted snapshot (file or in-memory)
//! - Policy: pure choice of fallback tier
//! - Prompt: interactive adapter for manual values
//! - Provider: runs the chain and never fails

pub mod feed;
pub mod policy;
pub mod prompt;
pub mod provider;
pub mod store;

pub use feed::{HamQslFeed, SpaceWeatherFeed, parse_solar_xml};
pub use policy::{AcquisitionMode, Action, Situation, decide};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use provider::{Acquisition, SolarDataProvider};
pub use store::{JsonFileStore, MemoryStore, SnapshotStore};
