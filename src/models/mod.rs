//! Data models for the hfprop library
//!
//! This module contains the core domain models organized by concern:
//! - Location: Coordinates and resolved locations
//! - Solar: Space-weather snapshots and their trust tier
//! - Band: Per-band propagation predictions

pub mod band;
pub mod location;
pub mod solar;

// Re-export all public types for convenient access
pub use band::{BandPrediction, BestHours, ReliabilityLabel};
pub use location::{Coordinate, LocationResult};
pub use solar::{GeomagneticCondition, SolarActivity, SolarSnapshot, SolarSource};
