//! `hfprop` - HF radio propagation estimates for amateur radio operators
//!
//! This library parses station locations, acquires current space-weather
//! indices with a resilient fallback chain, and turns path geometry plus
//! solar data into per-band propagation predictions.

pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod models;
pub mod propagation;
pub mod report;
pub mod solar;

// Re-export core types for public API
pub use config::HfPropConfig;
pub use error::HfPropError;
pub use geo::{GeoLocator, GridLookup, ParseOutcome};
pub use models::{BandPrediction, Coordinate, LocationResult, SolarSnapshot, SolarSource};
pub use propagation::{Forecast, PathGeometry, PropagationModel, Recommendation};
pub use report::{Report, render_report};
pub use solar::{Acquisition, SolarDataProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, HfPropError>;
