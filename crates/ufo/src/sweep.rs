//! Radius sweep: minimal term count for each acceptance radius.
//!
//! Records come back in input order, one per input radius (duplicates
//! included). `sweep_par` spreads the per-radius searches over rayon's pool;
//! they share no state, so the table is identical to `sweep`.

use rayon::prelude::*;

use crate::search::{search_precision, SearchCfg};
use crate::sim::SimCfg;

/// One row of the radius → precision table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusPrecisionRecord {
    pub radius: f64,
    pub min_precision: usize,
    /// True if no term count up to the ceiling reached (`min_precision` is the ceiling).
    pub saturated: bool,
}

/// Radii 2, 4, …, 20.
pub fn default_radii() -> Vec<f64> {
    (1..=10).map(|k| 2.0 * k as f64).collect()
}

fn record(cfg: &SimCfg, search: SearchCfg, radius: f64) -> RadiusPrecisionRecord {
    let hit = search_precision(cfg, search, radius);
    RadiusPrecisionRecord {
        radius,
        min_precision: hit.value(),
        saturated: hit.is_saturated(),
    }
}

/// Sequential sweep over `radii`.
pub fn sweep(cfg: &SimCfg, search: SearchCfg, radii: &[f64]) -> Vec<RadiusPrecisionRecord> {
    let out: Vec<_> = radii.iter().map(|&r| record(cfg, search, r)).collect();
    log_summary(&out);
    out
}

/// Parallel sweep over `radii`; same output as [`sweep`].
pub fn sweep_par(cfg: &SimCfg, search: SearchCfg, radii: &[f64]) -> Vec<RadiusPrecisionRecord> {
    let out: Vec<_> = radii.par_iter().map(|&r| record(cfg, search, r)).collect();
    log_summary(&out);
    out
}

fn log_summary(records: &[RadiusPrecisionRecord]) {
    let saturated = records.iter().filter(|r| r.saturated).count();
    let worst = records.iter().map(|r| r.min_precision).max().unwrap_or(0);
    tracing::debug!(rows = records.len(), saturated, worst, "sweep");
}

/// Adjacent pairs (ordered by radius) where the larger radius needs strictly
/// more terms than the smaller one.
///
/// An empty result means the table is non-increasing in radius.
pub fn monotonicity_breaks(
    records: &[RadiusPrecisionRecord],
) -> Vec<(RadiusPrecisionRecord, RadiusPrecisionRecord)> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.radius.total_cmp(&b.radius));
    sorted
        .windows(2)
        .filter(|w| w[1].min_precision > w[0].min_precision)
        .map(|w| (w[0], w[1]))
        .collect()
}
