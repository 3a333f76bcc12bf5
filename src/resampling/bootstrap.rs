//! resampling::bootstrap — percentile bootstrap confidence interval for
//! a sample mean.
//!
//! Purpose
//! -------
//! Quantify the sampling uncertainty of a mean estimate without a
//! parametric model, either by IID resampling or by moving-block
//! resampling when the observations are serially dependent.
//!
//! Key behaviors
//! -------------
//! - Each iteration draws a resample of the original length, computes
//!   its mean, and the interval is read off the sorted replicate means
//!   at the `alpha / 2` and `1 - alpha / 2` percentiles.
//! - With `block_len` set on the plan, resamples are built from
//!   contiguous blocks so short-range autocorrelation survives into the
//!   replicates. Choose a block at least as long as the model order.
//! - Iterations fan out over `rayon` with per-iteration RNG streams;
//!   seeded plans reproduce exactly at any thread count.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower <= upper` always holds.
//! - Percentiles use nearest-rank indexing on the sorted replicates.
//!
//! Downstream usage
//! ----------------
//! - Used to attach intervals to fitted dominant moduli and other scalar
//!   summaries of a series.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::resampling::errors::{ResampleError, ResampleResult};
use crate::resampling::permutation::validate_group;
use crate::resampling::plan::ResamplePlan;
use crate::utils::mean;

/// BootstrapCI — percentile interval for the sample mean.
///
/// Fields
/// ------
/// - `lower`, `upper`:
///   Interval endpoints at confidence level `1 - alpha`.
/// - `alpha`:
///   Total tail mass split evenly between the two sides.
/// - `n_iter`:
///   Number of bootstrap replicates behind the interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapCI {
    pub lower: f64,
    pub upper: f64,
    pub alpha: f64,
    pub n_iter: usize,
}

/// Build a percentile bootstrap interval for the mean of `samples`.
///
/// Parameters
/// ----------
/// - `samples`:
///   Observed values; at least 2, all finite.
/// - `plan`:
///   Iteration budget, seeding, and optional block length.
/// - `alpha`:
///   Total tail mass, strictly between 0 and 1. `0.05` gives a 95%
///   interval.
///
/// Returns
/// -------
/// - `Ok(BootstrapCI)` with the percentile endpoints.
///
/// Errors
/// ------
/// - `ResampleError::GroupTooSmall` if fewer than 2 observations.
/// - `ResampleError::InvalidData` if any observation is non-finite.
/// - `ResampleError::InvalidAlpha` if `alpha` is outside (0, 1).
/// - `ResampleError::InvalidIterations` / `InvalidBlockLength` for a
///   malformed plan.
pub fn bootstrap_ci(
    samples: &[f64],
    plan: &ResamplePlan,
    alpha: f64,
) -> ResampleResult<BootstrapCI> {
    validate_group("samples", samples)?;
    plan.validate(samples.len())?;
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ResampleError::InvalidAlpha(alpha));
    }

    let mut replicates: Vec<f64> = plan
        .iteration_seeds()
        .into_par_iter()
        .map(|seed| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            let resample = match plan.block_len {
                Some(block) => block_resample(samples, block, &mut rng),
                None => iid_resample(samples, &mut rng),
            };
            mean(&resample)
        })
        .collect();
    replicates.sort_by(|a, b| a.total_cmp(b));

    Ok(BootstrapCI {
        lower: percentile(&replicates, alpha / 2.0),
        upper: percentile(&replicates, 1.0 - alpha / 2.0),
        alpha,
        n_iter: plan.n_iter,
    })
}

/// Nearest-rank percentile of an ascending-sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let idx = (q * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx]
}

fn iid_resample(samples: &[f64], rng: &mut Xoshiro256PlusPlus) -> Vec<f64> {
    (0..samples.len()).map(|_| samples[rng.gen_range(0..samples.len())]).collect()
}

/// Moving-block resample: concatenate random contiguous blocks, then
/// truncate to the original length.
fn block_resample(samples: &[f64], block: usize, rng: &mut Xoshiro256PlusPlus) -> Vec<f64> {
    let n = samples.len();
    let mut resample = Vec::with_capacity(n + block);
    while resample.len() < n {
        let start = rng.gen_range(0..=(n - block));
        resample.extend_from_slice(&samples[start..start + block]);
    }
    resample.truncate(n);
    resample
}
