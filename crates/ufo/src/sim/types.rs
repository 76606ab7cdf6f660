//! Configuration and state types for one simulation run.
//!
//! - `SimCfg`: geometry (start, end, step) plus the per-run step budget and
//!   step quantization. Passed explicitly to every call.
//! - `SimState`: immutable snapshot after some number of steps.
//! - `RunOutcome`: what `run` reports once a run terminates.

use std::fmt;

use nalgebra::Vector2;

/// How each step displacement is applied to the position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepMode {
    /// Full `f64` displacement.
    #[default]
    Continuous,
    /// Displacement truncated toward zero to whole units (pixel stepping).
    Truncated,
}

/// Simulation geometry and bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimCfg {
    pub start: Vector2<f64>,
    /// Target; also the center of the acceptance circle.
    pub end: Vector2<f64>,
    /// Per-step magnitude.
    pub step: f64,
    /// Maximum number of steps per run.
    pub step_budget: usize,
    pub mode: StepMode,
}

impl Default for SimCfg {
    fn default() -> Self {
        Self {
            start: Vector2::new(100.0, 100.0),
            end: Vector2::new(1500.0, 800.0),
            step: 5.0,
            step_budget: 2000,
            mode: StepMode::Continuous,
        }
    }
}

impl SimCfg {
    /// Reject geometry for which a run is meaningless.
    pub fn validate(&self) -> Result<(), CfgError> {
        if !(self.start.iter().all(|c| c.is_finite()) && self.end.iter().all(|c| c.is_finite())) {
            return Err(CfgError::NonFiniteGeometry);
        }
        if self.start == self.end {
            return Err(CfgError::DegenerateBearing);
        }
        if !self.step.is_finite() || self.step == 0.0 {
            return Err(CfgError::BadStep(self.step));
        }
        if self.step_budget == 0 {
            return Err(CfgError::ZeroStepBudget);
        }
        Ok(())
    }
}

/// Errors surfaced by configuration checks.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgError {
    /// Start or end has a NaN/∞ coordinate.
    NonFiniteGeometry,
    /// Start equals end, so no bearing exists.
    DegenerateBearing,
    /// Step magnitude is zero or not finite.
    BadStep(f64),
    ZeroStepBudget,
    ZeroPrecisionCeiling,
    /// Acceptance radius is negative or not finite.
    BadRadius(f64),
}

impl fmt::Display for CfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgError::NonFiniteGeometry => write!(f, "start/end coordinates must be finite"),
            CfgError::DegenerateBearing => {
                write!(f, "start and end coincide; bearing is undefined")
            }
            CfgError::BadStep(s) => write!(f, "step magnitude {} must be finite and non-zero", s),
            CfgError::ZeroStepBudget => write!(f, "step budget must be at least 1"),
            CfgError::ZeroPrecisionCeiling => write!(f, "precision ceiling must be at least 1"),
            CfgError::BadRadius(r) => {
                write!(f, "acceptance radius {} must be finite and non-negative", r)
            }
        }
    }
}

impl std::error::Error for CfgError {}

/// Check an acceptance radius the same way configs are checked.
pub fn validate_radius(radius: f64) -> Result<(), CfgError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(CfgError::BadRadius(radius))
    }
}

/// Where a run stands after its latest step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Moving,
    /// Inside the acceptance circle.
    Reached,
    /// Passed the target's x-coordinate in the direction of travel.
    Overshot,
    BudgetExhausted,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Moving)
    }
}

/// Snapshot of a run. `advance` returns a new value; nothing is updated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimState {
    pub pos: Vector2<f64>,
    pub steps: usize,
    pub status: Status,
}

impl SimState {
    /// Initial state at the configured start.
    pub fn at_start(cfg: &SimCfg) -> Self {
        Self {
            pos: cfg.start,
            steps: 0,
            status: Status::Moving,
        }
    }

    #[inline]
    pub fn reached(&self) -> bool {
        self.status == Status::Reached
    }
}

/// Terminal result of `run`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunOutcome {
    pub position: Vector2<f64>,
    pub reached: bool,
    pub steps: usize,
    pub stop: Status,
}

impl From<SimState> for RunOutcome {
    fn from(s: SimState) -> Self {
        Self {
            position: s.pos,
            reached: s.reached(),
            steps: s.steps,
            stop: s.status,
        }
    }
}
