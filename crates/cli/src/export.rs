//! File artifacts: the radius/precision table, chart data, and trajectory traces.
//!
//! The table format is fixed: header `Radius,MinPrecision`, then one
//! `radius,min_precision` row per record in sweep order. Whole-number radii are
//! written without a fractional part.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use ufo::api::{RadiusPrecisionRecord, SimState};
use ufo::Vec2;

pub const RADIUS_COL: &str = "Radius";
pub const PRECISION_COL: &str = "MinPrecision";

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Two-column table frame; radius is `Int64` when every radius is whole.
pub fn table_frame(records: &[RadiusPrecisionRecord]) -> PolarsResult<DataFrame> {
    let precision: Vec<i64> = records.iter().map(|r| r.min_precision as i64).collect();
    let whole = records
        .iter()
        .all(|r| r.radius.fract() == 0.0 && r.radius.abs() < 9.0e15);
    if whole {
        let radius: Vec<i64> = records.iter().map(|r| r.radius as i64).collect();
        df!(RADIUS_COL => radius, PRECISION_COL => precision)
    } else {
        let radius: Vec<f64> = records.iter().map(|r| r.radius).collect();
        df!(RADIUS_COL => radius, PRECISION_COL => precision)
    }
}

pub fn write_table(path: &Path, records: &[RadiusPrecisionRecord]) -> Result<()> {
    let mut df = table_frame(records)?;
    write_csv(path, &mut df)?;
    tracing::info!(path = %path.display(), rows = df.height(), "table_written");
    Ok(())
}

/// Read a table written by [`write_table`] back as `(radius, min_precision)` pairs.
pub fn read_table(path: &Path) -> Result<Vec<(f64, i64)>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let radius = df.column(RADIUS_COL)?.cast(&DataType::Float64)?;
    let precision = df.column(PRECISION_COL)?.cast(&DataType::Int64)?;
    let mut rows = Vec::with_capacity(df.height());
    for (i, (r, n)) in radius
        .f64()?
        .into_iter()
        .zip(precision.i64()?.into_iter())
        .enumerate()
    {
        match (r, n) {
            (Some(r), Some(n)) => rows.push((r, n)),
            _ => bail!("row {} of {} has an empty cell", i + 1, path.display()),
        }
    }
    Ok(rows)
}

/// Scatter-plot description handed to an external chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// `[radius, min_precision]` pairs in table order.
    pub points: Vec<[f64; 2]>,
}

impl ScatterSpec {
    pub fn from_rows(rows: &[(f64, i64)]) -> Self {
        Self {
            title: "Required precision vs. acceptance radius".to_string(),
            x_label: "Acceptance radius".to_string(),
            y_label: "Minimal series terms (n)".to_string(),
            points: rows.iter().map(|&(r, n)| [r, n as f64]).collect(),
        }
    }
}

pub fn write_scatter(path: &Path, spec: &ScatterSpec) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(spec)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), points = spec.points.len(), "scatter_written");
    Ok(())
}

/// `step,x,y` rows, starting with the start point at step 0.
pub fn write_trace(path: &Path, start: Vec2<f64>, states: &[SimState]) -> Result<()> {
    let mut step = vec![0i64];
    let mut xs = vec![start.x];
    let mut ys = vec![start.y];
    for s in states {
        step.push(s.steps as i64);
        xs.push(s.pos.x);
        ys.push(s.pos.y);
    }
    let mut df = df!("step" => step, "x" => xs, "y" => ys)?;
    write_csv(path, &mut df)?;
    tracing::info!(path = %path.display(), rows = df.height(), "trace_written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use ufo::api::{default_radii, sweep, SearchCfg, SimCfg, Trajectory};

    fn rec(radius: f64, min_precision: usize) -> RadiusPrecisionRecord {
        RadiusPrecisionRecord {
            radius,
            min_precision,
            saturated: false,
        }
    }

    #[test]
    fn default_sweep_table_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("result").join("data.txt");
        let table = sweep(&SimCfg::default(), SearchCfg::default(), &default_radii());
        write_table(&path, &table).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Radius,MinPrecision");
        assert_eq!(lines[1], "2,3");
        assert_eq!(lines[10], "20,2");
    }

    #[test]
    fn fractional_radii_keep_their_fraction() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        write_table(&path, &[rec(2.5, 3), rec(4.0, 2)]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "2.5,3");
        assert!(lines[2].starts_with('4'));
    }

    #[test]
    fn table_reads_back_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        write_table(&path, &[rec(6.0, 2), rec(2.0, 3), rec(6.0, 2)]).unwrap();
        let rows = read_table(&path).unwrap();
        assert_eq!(rows, vec![(6.0, 2), (2.0, 3), (6.0, 2)]);
        let spec = ScatterSpec::from_rows(&rows);
        assert_eq!(spec.points, vec![[6.0, 2.0], [2.0, 3.0], [6.0, 2.0]]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.csv");
        fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(read_table(&path).is_err());
    }

    #[test]
    fn trace_starts_at_start_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.csv");
        let cfg = SimCfg::default();
        let states: Vec<_> = Trajectory::new(cfg, 2, 20.0).collect();
        write_trace(&path, cfg.start, &states).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "step,x,y");
        assert!(lines[1].starts_with("0,100"));
        assert_eq!(lines.len(), 2 + states.len());
    }
}
