//! Straight-bearing trajectory simulation driven by the series approximation.
//!
//! Purpose
//! - Walk a point from `SimCfg::start` toward `SimCfg::end` using step vectors
//!   built from `series::{cos_series, sin_series}` at a fixed term count.
//! - Expose one stepping primitive (`advance`) used both lazily (`Trajectory`,
//!   one state per external tick) and eagerly (`run`).
//!
//! Termination
//! - Reached: distance to `end` ≤ stop radius (checked first).
//! - Overshot: x passed `end.x` in the sign of the step's x-displacement.
//! - BudgetExhausted: `step_budget` steps taken without either.
//!
//! The acceptance circle is always centered on `end`, the same point the
//! bearing aims at.

mod trajectory;
mod types;

pub use trajectory::{advance, bearing, run, step_vector, Trajectory};
pub use types::{validate_radius, CfgError, RunOutcome, SimCfg, SimState, Status, StepMode};

#[cfg(test)]
mod tests;
