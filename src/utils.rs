//! utils — shared descriptive statistics.
//!
//! Small helpers used across the estimation, diagnostics, and resampling
//! subtrees. All functions assume validated input (non-empty, finite);
//! public entry points guard those invariants before calling in here.

/// Arithmetic mean. Assumes `data` is non-empty.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance (denominator n). Assumes `data` is non-empty.
#[inline]
pub fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Mean-subtracted copy of `data`.
#[inline]
pub fn center(data: &[f64]) -> Vec<f64> {
    let m = mean(data);
    data.iter().map(|&x| x - m).collect()
}

/// Sample autocorrelation at `lag`, normalized by the lag-0 sum of squares
/// of the centered series. Assumes `lag < data.len()` and a non-constant
/// series; callers guard both.
pub fn autocorrelation(data: &[f64], lag: usize) -> f64 {
    let centered = center(data);
    let denom: f64 = centered.iter().map(|&x| x * x).sum();
    let numer: f64 = centered[lag..].iter().zip(centered.iter()).map(|(&a, &b)| a * b).sum();
    numer / denom
}
