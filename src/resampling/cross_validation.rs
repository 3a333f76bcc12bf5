//! resampling::cross_validation — k-fold out-of-sample validation for a
//! linear predictor.
//!
//! Purpose
//! -------
//! Measure how much of a fitted model's explanatory power survives on
//! held-out data, and flag the fit as overfit when the in-sample R²
//! exceeds the out-of-sample R² by more than a fixed margin.
//!
//! Key behaviors
//! -------------
//! - Rows are shuffled once, split into `k` near-equal folds, and each
//!   fold in turn serves as the test set while the rest train an OLS
//!   coefficient vector through the normal equations.
//! - R² is computed about each subset's own mean; a zero-variance subset
//!   scores 0 rather than dividing by zero.
//! - The design matrix carries no intercept column; callers center their
//!   data first, matching the autoregressive fitting convention.
//!
//! Invariants & assumptions
//! ------------------------
//! - `2 <= k <= n` where `n` is the number of rows.
//! - Test R² can be negative: a model worse than the held-out mean is
//!   reported as such, not clamped.
//!
//! Downstream usage
//! ----------------
//! - Used on lagged design matrices to check that a chosen
//!   autoregressive order generalizes beyond the fitting window.

use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::linalg::solve::solve;
use crate::resampling::errors::{ResampleError, ResampleResult};
use crate::utils::mean;

/// Margin by which train R² may exceed mean test R² before the fit is
/// flagged as overfit.
pub const OVERFIT_MARGIN: f64 = 0.2;

/// CVOutcome — aggregate scores from a k-fold run.
///
/// Fields
/// ------
/// - `mean_train_r2`:
///   Average in-sample R² over the `k` training splits.
/// - `mean_test_r2`:
///   Average out-of-sample R² over the `k` test folds.
/// - `std_test_r2`:
///   Population standard deviation of the test R² values.
/// - `overfit`:
///   `true` when `mean_train_r2 - mean_test_r2 > OVERFIT_MARGIN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CVOutcome {
    pub mean_train_r2: f64,
    pub mean_test_r2: f64,
    pub std_test_r2: f64,
    pub overfit: bool,
}

/// Run k-fold cross-validation of an OLS predictor.
///
/// Parameters
/// ----------
/// - `x`:
///   Design matrix, one row per observation. No intercept column.
/// - `y`:
///   Targets, one per row of `x`.
/// - `k`:
///   Fold count, between 2 and the number of rows.
/// - `seed`:
///   Shuffle seed. `None` draws one from OS entropy.
///
/// Returns
/// -------
/// - `Ok(CVOutcome)` with mean train/test R² and the overfit flag.
///
/// Errors
/// ------
/// - `ResampleError::LengthMismatch` if `x` and `y` disagree on rows.
/// - `ResampleError::InvalidFoldCount` if `k` is outside 2..=n.
/// - `ResampleError::InvalidData` if any entry is non-finite.
/// - `ResampleError::LinAlg` if a training split's normal equations are
///   singular, i.e. the design columns are collinear on that split.
pub fn cross_validate(
    x: &Array2<f64>,
    y: &Array1<f64>,
    k: usize,
    seed: Option<u64>,
) -> ResampleResult<CVOutcome> {
    let n = x.nrows();
    if y.len() != n {
        return Err(ResampleError::LengthMismatch { rows: n, targets: y.len() });
    }
    if k < 2 || k > n {
        return Err(ResampleError::InvalidFoldCount { k, n });
    }
    for &value in x.iter().chain(y.iter()) {
        if !value.is_finite() {
            return Err(ResampleError::InvalidData(value));
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };
    order.shuffle(&mut rng);

    let mut train_scores = Vec::with_capacity(k);
    let mut test_scores = Vec::with_capacity(k);
    for fold in 0..k {
        // Fold `fold` takes every k-th shuffled index, so sizes differ
        // by at most one.
        let test_idx: Vec<usize> = order.iter().copied().skip(fold).step_by(k).collect();
        let train_idx: Vec<usize> = order
            .iter()
            .copied()
            .enumerate()
            .filter(|(pos, _)| pos % k != fold)
            .map(|(_, idx)| idx)
            .collect();

        let x_train = x.select(Axis(0), &train_idx);
        let y_train = y.select(Axis(0), &train_idx);
        let x_test = x.select(Axis(0), &test_idx);
        let y_test = y.select(Axis(0), &test_idx);

        let gram = x_train.t().dot(&x_train);
        let rhs = x_train.t().dot(&y_train);
        let coefficients = solve(&gram, &rhs)?;

        train_scores.push(r_squared(&x_train, &y_train, &coefficients));
        test_scores.push(r_squared(&x_test, &y_test, &coefficients));
    }

    let mean_train_r2 = mean(&train_scores);
    let mean_test_r2 = mean(&test_scores);
    let var_test =
        test_scores.iter().map(|r| (r - mean_test_r2).powi(2)).sum::<f64>() / k as f64;
    Ok(CVOutcome {
        mean_train_r2,
        mean_test_r2,
        std_test_r2: var_test.sqrt(),
        overfit: mean_train_r2 - mean_test_r2 > OVERFIT_MARGIN,
    })
}

/// R² of `coefficients` on `(x, y)`, about the subset's own mean.
fn r_squared(x: &Array2<f64>, y: &Array1<f64>, coefficients: &Array1<f64>) -> f64 {
    let predicted = x.dot(coefficients);
    let y_bar = y.sum() / y.len() as f64;
    let ss_res: f64 = y.iter().zip(predicted.iter()).map(|(t, p)| (t - p).powi(2)).sum();
    let ss_tot: f64 = y.iter().map(|t| (t - y_bar).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    1.0 - ss_res / ss_tot
}
