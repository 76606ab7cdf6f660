//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI,
//!   benches, and examples in this workspace. Breaking changes are allowed.

// Series approximation
pub use crate::series::{cos_series, reduce_angle, sin_series};
// Trajectory simulation
pub use crate::sim::{
    advance, bearing, run, step_vector, validate_radius, CfgError, RunOutcome, SimCfg, SimState,
    Status, StepMode, Trajectory,
};
// Precision search and sweep
pub use crate::search::{min_precision_for_radius, search_precision, PrecisionHit, SearchCfg};
pub use crate::sweep::{
    default_radii, monotonicity_breaks, sweep, sweep_par, RadiusPrecisionRecord,
};
