//! Truncated alternating Maclaurin series for sine and cosine.
//!
//! Purpose
//! - Model "navigational precision" as the number of series terms `n` kept when
//!   turning a bearing into a step vector. Low `n` is deliberately crude:
//!   `n = 1` gives `cos ≈ 1`, `sin ≈ x`.
//!
//! Model
//! - The angle is reduced once with the truncated remainder `x % 2π`. The sign
//!   of the input survives and no further folding into (−π, π] happens, so the
//!   series is only accurate for the moderate angles a bearing produces.
//! - Terms follow the ratio recurrence `t_{k+1} = −t_k · x² / ((p+2)(p+1))`,
//!   with `p` the power of `t_k`.
//!
//! Term counts are `usize`; `n = 0` is clamped to one term so both functions
//! stay total.

use std::f64::consts::TAU;

/// Reduce `x` modulo 2π, keeping the sign of `x` (result in (−2π, 2π)).
#[inline]
pub fn reduce_angle(x: f64) -> f64 {
    x % TAU
}

/// Sum of the first `n` terms of `x^p / p!` with alternating signs, starting at
/// power `p0` with leading term `first`.
#[inline]
fn alternating_sum(x: f64, first: f64, p0: usize, n: usize) -> f64 {
    let mut sum = 0.0;
    let mut term = first;
    let mut power = p0;
    for _ in 0..n.max(1) {
        sum += term;
        power += 2;
        term = -term * x * x / (power * (power - 1)) as f64;
    }
    sum
}

/// cos(x) from the first `n` series terms: `1 − x²/2! + x⁴/4! − …`.
pub fn cos_series(x: f64, n: usize) -> f64 {
    let x = reduce_angle(x);
    alternating_sum(x, 1.0, 0, n)
}

/// sin(x) from the first `n` series terms: `x − x³/3! + x⁵/5! − …`.
pub fn sin_series(x: f64, n: usize) -> f64 {
    let x = reduce_angle(x);
    alternating_sum(x, x, 1, n)
}
