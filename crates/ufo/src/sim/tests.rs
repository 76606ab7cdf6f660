use super::*;
use nalgebra::{vector, Vector2};

fn default_bearing(cfg: &SimCfg) -> f64 {
    bearing(cfg.start, cfg.end)
}

#[test]
fn bearing_of_default_geometry() {
    let cfg = SimCfg::default();
    let theta = default_bearing(&cfg);
    assert!((theta - 0.5_f64.atan()).abs() < 1e-15);
}

#[test]
fn two_terms_reach_radius_twenty() {
    let cfg = SimCfg::default();
    let out = run(&cfg, default_bearing(&cfg), 2, 20.0);
    assert!(out.reached);
    assert_eq!(out.stop, Status::Reached);
    assert_eq!(out.steps, 310);
    assert!((out.position - vector![1483.3989433675813, 792.905733429699]).norm() < 1e-6);
    assert!((cfg.end - out.position).norm() <= 20.0);
}

#[test]
fn one_term_drifts_low_and_overshoots() {
    // n = 1: step vector is (5, 5θ), too shallow to meet the target circle.
    let cfg = SimCfg::default();
    let out = run(&cfg, default_bearing(&cfg), 1, 20.0);
    assert!(!out.reached);
    assert_eq!(out.stop, Status::Overshot);
    assert_eq!(out.steps, 281);
    assert!((out.position.x - 1505.0).abs() < 1e-9);
    assert!(out.position.x > cfg.end.x);
}

#[test]
fn zero_radius_terminates_by_overshoot() {
    let cfg = SimCfg::default();
    let out = run(&cfg, default_bearing(&cfg), 10, 0.0);
    assert_eq!(out.stop, Status::Overshot);
    assert_eq!(out.steps, 314);
    assert!(out.steps < cfg.step_budget);
}

#[test]
fn budget_bounds_the_run() {
    let cfg = SimCfg {
        step_budget: 100,
        ..SimCfg::default()
    };
    let out = run(&cfg, default_bearing(&cfg), 10, 20.0);
    assert_eq!(out.stop, Status::BudgetExhausted);
    assert_eq!(out.steps, 100);
    assert!(!out.reached);
}

#[test]
fn zero_budget_never_moves() {
    let cfg = SimCfg {
        step_budget: 0,
        ..SimCfg::default()
    };
    let out = run(&cfg, default_bearing(&cfg), 10, 20.0);
    assert_eq!(out.stop, Status::BudgetExhausted);
    assert_eq!(out.steps, 0);
    assert_eq!(out.position, cfg.start);
    assert_eq!(Trajectory::new(cfg, 10, 20.0).count(), 0);
}

#[test]
fn truncated_steps_land_on_whole_units() {
    let cfg = SimCfg {
        mode: StepMode::Truncated,
        ..SimCfg::default()
    };
    let out = run(&cfg, default_bearing(&cfg), 10, 20.0);
    assert!(out.reached);
    assert_eq!(out.steps, 346);
    assert_eq!(out.position, vector![1484.0, 792.0]);
}

#[test]
fn leftward_travel_uses_negative_overshoot_guard() {
    let cfg = SimCfg {
        start: Vector2::new(1500.0, 800.0),
        end: Vector2::new(100.0, 100.0),
        ..SimCfg::default()
    };
    let theta = default_bearing(&cfg);
    let out = run(&cfg, theta, 10, 20.0);
    assert!(out.reached);
    assert_eq!(out.steps, 310);

    // cos ≈ 1 at one term sends the point right, away from the target.
    let crude = run(&cfg, theta, 1, 20.0);
    assert_eq!(crude.stop, Status::Overshot);
    assert_eq!(crude.steps, 1);

    let blind = run(&cfg, theta, 10, 0.0);
    assert_eq!(blind.stop, Status::Overshot);
    assert!(blind.position.x < cfg.end.x);
}

#[test]
fn advance_returns_new_state_and_keeps_input() {
    let cfg = SimCfg::default();
    let s0 = SimState::at_start(&cfg);
    let disp = step_vector(&cfg, default_bearing(&cfg), 10);
    let s1 = advance(&cfg, &s0, disp, 20.0);
    assert_eq!(s0.pos, cfg.start);
    assert_eq!(s0.steps, 0);
    assert_eq!(s1.steps, 1);
    assert_eq!(s1.pos, cfg.start + disp);
    assert_eq!(s1.status, Status::Moving);

    let done = SimState {
        status: Status::Reached,
        ..s1
    };
    assert_eq!(advance(&cfg, &done, disp, 20.0), done);
}

#[test]
fn trajectory_matches_run() {
    let cfg = SimCfg::default();
    for n in [1, 2, 3, 10] {
        let states: Vec<SimState> = Trajectory::new(cfg, n, 20.0).collect();
        let out = run(&cfg, default_bearing(&cfg), n, 20.0);
        let last = states.last().copied().expect("at least one step");
        assert_eq!(states.len(), out.steps);
        assert_eq!(RunOutcome::from(last), out);
        assert!(states[..states.len() - 1]
            .iter()
            .all(|s| s.status == Status::Moving));
    }
}

#[test]
fn trajectory_exposes_state_between_ticks() {
    let mut tr = Trajectory::new(SimCfg::default(), 10, 20.0);
    assert_eq!(tr.state().steps, 0);
    let first = tr.next().expect("first tick");
    assert_eq!(*tr.state(), first);
    assert!((tr.displacement().norm() - 5.0).abs() < 1e-9);
}

#[test]
fn validation_rejects_degenerate_configs() {
    assert!(SimCfg::default().validate().is_ok());
    let same = SimCfg {
        end: Vector2::new(100.0, 100.0),
        ..SimCfg::default()
    };
    assert_eq!(same.validate(), Err(CfgError::DegenerateBearing));
    let still = SimCfg {
        step: 0.0,
        ..SimCfg::default()
    };
    assert_eq!(still.validate(), Err(CfgError::BadStep(0.0)));
    let no_budget = SimCfg {
        step_budget: 0,
        ..SimCfg::default()
    };
    assert_eq!(no_budget.validate(), Err(CfgError::ZeroStepBudget));
    let nan = SimCfg {
        start: Vector2::new(f64::NAN, 0.0),
        ..SimCfg::default()
    };
    assert_eq!(nan.validate(), Err(CfgError::NonFiniteGeometry));
    assert!(validate_radius(0.0).is_ok());
    assert_eq!(validate_radius(-1.0), Err(CfgError::BadRadius(-1.0)));
}
