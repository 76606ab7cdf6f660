//! Minimal series term count that lands inside an acceptance radius.
//!
//! The search is a linear scan `n = 1, 2, …, ceiling`. Reachability is not
//! assumed to be monotone in `n`, so no bisection. If nothing up to the
//! ceiling reaches, the ceiling itself is reported (saturation).

use crate::sim::{bearing, run, CfgError, SimCfg};

/// Search bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// Largest term count tried.
    pub precision_ceiling: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            precision_ceiling: 20,
        }
    }
}

impl SearchCfg {
    pub fn validate(&self) -> Result<(), CfgError> {
        if self.precision_ceiling == 0 {
            return Err(CfgError::ZeroPrecisionCeiling);
        }
        Ok(())
    }
}

/// Result of one precision search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrecisionHit {
    /// Smallest `n` whose run reached the target.
    Reached(usize),
    /// No `n ≤ ceiling` reached; carries the ceiling.
    Saturated(usize),
}

impl PrecisionHit {
    /// Term count to report: the hit, or the ceiling when saturated.
    #[inline]
    pub fn value(self) -> usize {
        match self {
            PrecisionHit::Reached(n) | PrecisionHit::Saturated(n) => n,
        }
    }

    #[inline]
    pub fn is_saturated(self) -> bool {
        matches!(self, PrecisionHit::Saturated(_))
    }
}

/// Scan term counts for `radius` around `cfg.end`.
pub fn search_precision(cfg: &SimCfg, search: SearchCfg, radius: f64) -> PrecisionHit {
    let ceiling = search.precision_ceiling.max(1);
    let theta = bearing(cfg.start, cfg.end);
    let hit = (1..=ceiling)
        .find(|&n| run(cfg, theta, n, radius).reached)
        .map_or(PrecisionHit::Saturated(ceiling), PrecisionHit::Reached);
    tracing::debug!(radius, ceiling, hit = ?hit, "precision_search");
    hit
}

/// Smallest term count reaching `radius`, saturating at the ceiling.
#[inline]
pub fn min_precision_for_radius(cfg: &SimCfg, search: SearchCfg, radius: f64) -> usize {
    search_precision(cfg, search, radius).value()
}
