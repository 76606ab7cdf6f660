//! Run configuration: defaults ← optional JSON file ← command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use ufo::api::{default_radii, validate_radius, SearchCfg, SimCfg, StepMode};
use ufo::Vec2;

/// Keys accepted in a `--config` JSON file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileCfg {
    pub start: Option<[f64; 2]>,
    pub end: Option<[f64; 2]>,
    pub step: Option<f64>,
    pub step_budget: Option<usize>,
    pub precision_ceiling: Option<usize>,
    pub radii: Option<Vec<f64>>,
    pub quantized: Option<bool>,
}

impl FileCfg {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Geometry flags shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct GeomArgs {
    /// JSON config file; flags given on the command line win over its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Start point as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub start: Option<[f64; 2]>,
    /// Target point as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub end: Option<[f64; 2]>,
    /// Per-step magnitude
    #[arg(long)]
    pub step: Option<f64>,
    /// Maximum steps per run
    #[arg(long)]
    pub step_budget: Option<usize>,
    /// Largest series term count tried by the search
    #[arg(long)]
    pub precision_ceiling: Option<usize>,
    /// Truncate each step to whole units
    #[arg(long)]
    pub quantized: bool,
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub sim: SimCfg,
    pub search: SearchCfg,
    pub radii: Vec<f64>,
}

impl Resolved {
    pub fn params(&self) -> Value {
        json!({
            "start": [self.sim.start.x, self.sim.start.y],
            "end": [self.sim.end.x, self.sim.end.y],
            "step": self.sim.step,
            "step_budget": self.sim.step_budget,
            "quantized": self.sim.mode == StepMode::Truncated,
            "precision_ceiling": self.search.precision_ceiling,
            "radii": self.radii,
        })
    }
}

pub fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok([x, y])
}

/// Merge flags over the config file (if any) over defaults, then validate.
pub fn resolve(args: &GeomArgs, radii: Option<&[f64]>) -> Result<Resolved> {
    let file = match &args.config {
        Some(path) => FileCfg::load(path)?,
        None => FileCfg::default(),
    };
    merge(args, &file, radii)
}

fn merge(args: &GeomArgs, file: &FileCfg, radii: Option<&[f64]>) -> Result<Resolved> {
    let base = SimCfg::default();
    let point = |p: Option<[f64; 2]>, q: Option<[f64; 2]>, dflt: Vec2<f64>| {
        p.or(q).map_or(dflt, |[x, y]| Vec2::new(x, y))
    };
    let quantized = args.quantized || file.quantized.unwrap_or(false);
    let sim = SimCfg {
        start: point(args.start, file.start, base.start),
        end: point(args.end, file.end, base.end),
        step: args.step.or(file.step).unwrap_or(base.step),
        step_budget: args
            .step_budget
            .or(file.step_budget)
            .unwrap_or(base.step_budget),
        mode: if quantized {
            StepMode::Truncated
        } else {
            StepMode::Continuous
        },
    };
    let search = SearchCfg {
        precision_ceiling: args
            .precision_ceiling
            .or(file.precision_ceiling)
            .unwrap_or(SearchCfg::default().precision_ceiling),
    };
    let radii = radii
        .map(<[f64]>::to_vec)
        .or_else(|| file.radii.clone())
        .unwrap_or_else(default_radii);

    sim.validate().context("invalid simulation geometry")?;
    search.validate().context("invalid search bounds")?;
    for &r in &radii {
        validate_radius(r).context("invalid radius list")?;
    }
    Ok(Resolved { sim, search, radii })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_parse_with_spaces() {
        assert_eq!(parse_point("100, 250.5"), Ok([100.0, 250.5]));
        assert!(parse_point("100").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let r = merge(&GeomArgs::default(), &FileCfg::default(), None).unwrap();
        assert_eq!(r.sim, SimCfg::default());
        assert_eq!(r.search, SearchCfg::default());
        assert_eq!(r.radii, default_radii());
    }

    #[test]
    fn flags_override_file_values() {
        let file = FileCfg {
            step: Some(2.0),
            step_budget: Some(50),
            end: Some([900.0, 100.0]),
            radii: Some(vec![1.0, 3.0]),
            quantized: Some(true),
            ..FileCfg::default()
        };
        let args = GeomArgs {
            step: Some(7.0),
            ..GeomArgs::default()
        };
        let r = merge(&args, &file, Some(&[5.0])).unwrap();
        assert_eq!(r.sim.step, 7.0);
        assert_eq!(r.sim.step_budget, 50);
        assert_eq!(r.sim.end, Vec2::new(900.0, 100.0));
        assert_eq!(r.sim.mode, StepMode::Truncated);
        assert_eq!(r.radii, vec![5.0]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let args = GeomArgs {
            step_budget: Some(0),
            ..GeomArgs::default()
        };
        assert!(merge(&args, &FileCfg::default(), None).is_err());
        assert!(merge(&GeomArgs::default(), &FileCfg::default(), Some(&[-1.0])).is_err());
        let args = GeomArgs {
            precision_ceiling: Some(0),
            ..GeomArgs::default()
        };
        assert!(merge(&args, &FileCfg::default(), None).is_err());
    }

    #[test]
    fn config_file_is_loaded_and_strict() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("run.json");
        fs::write(&good, r#"{"step": 3.0, "radii": [4, 8]}"#).unwrap();
        let args = GeomArgs {
            config: Some(good),
            ..GeomArgs::default()
        };
        let r = resolve(&args, None).unwrap();
        assert_eq!(r.sim.step, 3.0);
        assert_eq!(r.radii, vec![4.0, 8.0]);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"stepp": 3.0}"#).unwrap();
        assert!(FileCfg::load(&bad).is_err());
    }
}
