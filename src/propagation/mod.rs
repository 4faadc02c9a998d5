//! Empirical HF propagation model
//!
//! Pure functions from path geometry and solar indices to band predictions.
//! Nothing here keeps state or performs I/O.

pub mod bands;
pub mod hours;
pub mod model;
pub mod muf;
pub mod path;
pub mod reliability;

pub use bands::{Band, BandPlan};
pub use hours::estimate_best_hours;
pub use model::{Forecast, PropagationModel, Recommendation};
pub use muf::{estimate_fot, estimate_hops, estimate_muf};
pub use path::PathGeometry;
pub use reliability::estimate_reliability;
