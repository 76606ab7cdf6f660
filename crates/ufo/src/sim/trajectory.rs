//! Step primitive, trajectory iterator, and run-to-completion.
//!
//! One run holds the bearing and the term count fixed, so the step vector is
//! computed once and then added repeatedly. After every step the distance to
//! `cfg.end` is checked first, then the x-overshoot guard, then the budget.

use nalgebra::Vector2;

use super::types::{RunOutcome, SimCfg, SimState, Status, StepMode};
use crate::series::{cos_series, sin_series};

/// Angle of the straight line from `start` to `end` (`atan2(dy, dx)`).
#[inline]
pub fn bearing(start: Vector2<f64>, end: Vector2<f64>) -> f64 {
    let d = end - start;
    d.y.atan2(d.x)
}

/// Per-step displacement for `bearing` at `precision` series terms.
pub fn step_vector(cfg: &SimCfg, bearing: f64, precision: usize) -> Vector2<f64> {
    let dx = cfg.step * cos_series(bearing, precision);
    let dy = cfg.step * sin_series(bearing, precision);
    match cfg.mode {
        StepMode::Continuous => Vector2::new(dx, dy),
        StepMode::Truncated => Vector2::new(dx.trunc(), dy.trunc()),
    }
}

/// Whether `x` lies past `end_x` when moving with x-displacement `dx`.
#[inline]
fn overshot(dx: f64, x: f64, end_x: f64) -> bool {
    (dx > 0.0 && x > end_x) || (dx < 0.0 && x < end_x)
}

/// Take one step from `state`; terminal states are returned unchanged.
pub fn advance(
    cfg: &SimCfg,
    state: &SimState,
    disp: Vector2<f64>,
    stop_radius: f64,
) -> SimState {
    if state.status.is_terminal() {
        return *state;
    }
    let pos = state.pos + disp;
    let steps = state.steps + 1;
    let status = if (cfg.end - pos).norm() <= stop_radius {
        Status::Reached
    } else if overshot(disp.x, pos.x, cfg.end.x) {
        Status::Overshot
    } else if steps >= cfg.step_budget {
        Status::BudgetExhausted
    } else {
        Status::Moving
    };
    SimState { pos, steps, status }
}

/// Run from `cfg.start` until the target is reached, overshot, or the budget
/// is spent.
pub fn run(cfg: &SimCfg, bearing: f64, precision: usize, stop_radius: f64) -> RunOutcome {
    let mut state = SimState::at_start(cfg);
    if cfg.step_budget == 0 {
        state.status = Status::BudgetExhausted;
        return state.into();
    }
    let disp = step_vector(cfg, bearing, precision);
    while !state.status.is_terminal() {
        state = advance(cfg, &state, disp, stop_radius);
    }
    state.into()
}

/// Lazily yields the state after each step; the last item is terminal.
///
/// This is the tick-driven form of [`run`]: a renderer pulls one state per
/// frame and draws `pos`.
#[derive(Clone, Debug)]
pub struct Trajectory {
    cfg: SimCfg,
    disp: Vector2<f64>,
    stop_radius: f64,
    state: SimState,
}

impl Trajectory {
    /// Trajectory along the `cfg.start → cfg.end` bearing.
    pub fn new(cfg: SimCfg, precision: usize, stop_radius: f64) -> Self {
        let theta = bearing(cfg.start, cfg.end);
        Self::with_bearing(cfg, theta, precision, stop_radius)
    }

    pub fn with_bearing(cfg: SimCfg, bearing: f64, precision: usize, stop_radius: f64) -> Self {
        let disp = step_vector(&cfg, bearing, precision);
        let mut state = SimState::at_start(&cfg);
        if cfg.step_budget == 0 {
            state.status = Status::BudgetExhausted;
        }
        Self {
            cfg,
            disp,
            stop_radius,
            state,
        }
    }

    /// Latest state (the start state before the first call to `next`).
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Constant per-step displacement of this run.
    pub fn displacement(&self) -> Vector2<f64> {
        self.disp
    }
}

impl Iterator for Trajectory {
    type Item = SimState;

    fn next(&mut self) -> Option<SimState> {
        if self.state.status.is_terminal() {
            return None;
        }
        self.state = advance(&self.cfg, &self.state, self.disp, self.stop_radius);
        Some(self.state)
    }
}
