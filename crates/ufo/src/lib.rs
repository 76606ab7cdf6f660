//! Series-approximated navigation toward a fixed target.
//!
//! A point walks from `start` toward `end` in fixed-size steps along the
//! start→end bearing, but each step vector is built from truncated Maclaurin
//! series for sin/cos instead of the platform functions. The crate answers one
//! question: how many series terms are needed to land inside an acceptance
//! radius around the target before overshooting it?
//!
//! Layers (leaf first)
//! - `series`: `cos_series` / `sin_series` with an explicit term count.
//! - `sim`: configuration, single-step primitive, trajectory iterator, `run`.
//! - `search`: minimal term count for one acceptance radius.
//! - `sweep`: radius → minimal term count table.
//!
//! Everything here is pure; file output lives in the `cli` crate.

pub mod api;
pub mod search;
pub mod series;
pub mod sim;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::search::{min_precision_for_radius, search_precision, PrecisionHit, SearchCfg};
    pub use crate::series::{cos_series, reduce_angle, sin_series};
    pub use crate::sim::{
        advance, bearing, run, step_vector, CfgError, RunOutcome, SimCfg, SimState, Status,
        StepMode, Trajectory,
    };
    pub use crate::sweep::{default_radii, sweep, sweep_par, RadiusPrecisionRecord};
    pub use nalgebra::Vector2 as Vec2;
}
