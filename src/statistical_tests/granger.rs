//! statistical_tests::granger — lagged-regression causality F-test.
//!
//! Purpose
//! -------
//! Decide whether the history of a driver series improves prediction of
//! a target series beyond the target's own history. "Causality" here is
//! strictly predictive: a significant result means the driver's lags
//! carry incremental information, nothing more.
//!
//! Key behaviors
//! -------------
//! - Two nested OLS regressions share the same response window: the
//!   restricted model uses the target's own `order` lags, the
//!   unrestricted model adds the driver's `order` lags.
//! - The statistic is
//!   `F = ((RSS_r - RSS_u) / order) / (RSS_u / df_den)` with
//!   `df_den = m - 2 * order` and `m` the shared response length.
//! - Both series are centered before the lag matrices are built, so no
//!   intercept column is carried.
//! - A tiny negative numerator from floating-point cancellation clamps
//!   to zero rather than producing a negative F.
//!
//! Invariants & assumptions
//! ------------------------
//! - The two series are aligned sample-for-sample and equally long.
//! - `df_den >= 1`; shorter series are refused.
//!
//! Downstream usage
//! ----------------
//! - Used to test directional coupling between expression series, e.g.
//!   whether a regulator's trajectory predicts a downstream gene's.

use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::linalg::solve::solve;
use crate::statistical_tests::errors::{TestError, TestResult};
use crate::utils::center;

/// GrangerOutcome — F statistic and p-value of one causality test.
///
/// Fields
/// ------
/// - `f_statistic`:
///   The restricted-vs-unrestricted F ratio; non-negative.
/// - `df_num`, `df_den`:
///   Numerator and denominator degrees of freedom.
/// - `p_value`:
///   Upper-tail probability under the F distribution, computed through
///   the regularized incomplete beta function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrangerOutcome {
    pub f_statistic: f64,
    pub df_num: usize,
    pub df_den: usize,
    pub p_value: f64,
}

/// Test whether `driver` Granger-causes `target` at lag depth `order`.
///
/// Parameters
/// ----------
/// - `target`:
///   Series being predicted.
/// - `driver`:
///   Candidate predictive series, aligned with `target`.
/// - `order`:
///   Number of lags of each series entering the regressions.
///
/// Returns
/// -------
/// - `Ok(GrangerOutcome)` with the F statistic and p-value.
///
/// Errors
/// ------
/// - `TestError::LengthMismatch` if the series differ in length.
/// - `TestError::InvalidOrder` if `order` is zero.
/// - `TestError::InsufficientData` if the series are too short to leave
///   at least one denominator degree of freedom, i.e. shorter than
///   `3 * order + 1`.
/// - `TestError::InvalidData` on NaN or infinite observations.
/// - `TestError::LinAlg` if either regression's normal equations are
///   singular, typically constant or collinear lag columns.
pub fn granger_test(target: &[f64], driver: &[f64], order: usize) -> TestResult<GrangerOutcome> {
    if target.len() != driver.len() {
        return Err(TestError::LengthMismatch { left: target.len(), right: driver.len() });
    }
    if order == 0 {
        return Err(TestError::InvalidOrder(order));
    }
    let n = target.len();
    // m = n - order response rows; df_den = m - 2 * order must be >= 1.
    let needed = 3 * order + 1;
    if n < needed {
        return Err(TestError::InsufficientData { needed, found: n });
    }
    for &value in target.iter().chain(driver.iter()) {
        if !value.is_finite() {
            return Err(TestError::InvalidData(value));
        }
    }

    let y_centered = center(target);
    let x_centered = center(driver);
    let m = n - order;

    let response = Array1::from_iter(y_centered[order..].iter().copied());
    let restricted = lag_matrix(&[y_centered.as_slice()], order, m);
    let unrestricted = lag_matrix(&[y_centered.as_slice(), x_centered.as_slice()], order, m);

    let rss_restricted = residual_sum_of_squares(&restricted, &response)?;
    let rss_unrestricted = residual_sum_of_squares(&unrestricted, &response)?;

    let df_num = order;
    let df_den = m - 2 * order;
    let f_statistic =
        (((rss_restricted - rss_unrestricted) / df_num as f64) / (rss_unrestricted / df_den as f64))
            .max(0.0);

    // df_num, df_den >= 1 by the validations above.
    let f_dist = FisherSnedecor::new(df_num as f64, df_den as f64)
        .expect("degrees of freedom validated to be >= 1");
    let p_value = 1.0 - f_dist.cdf(f_statistic);
    Ok(GrangerOutcome { f_statistic, df_num, df_den, p_value })
}

/// Stack `order` lags of each source series into an `m x (sources * order)`
/// design matrix sharing the response window.
fn lag_matrix(sources: &[&[f64]], order: usize, m: usize) -> Array2<f64> {
    let mut design = Array2::zeros((m, sources.len() * order));
    for (s, source) in sources.iter().enumerate() {
        for lag in 1..=order {
            for row in 0..m {
                design[[row, s * order + (lag - 1)]] = source[order + row - lag];
            }
        }
    }
    design
}

fn residual_sum_of_squares(design: &Array2<f64>, response: &Array1<f64>) -> TestResult<f64> {
    let gram = design.t().dot(design);
    let rhs = design.t().dot(response);
    let coefficients = solve(&gram, &rhs)?;
    let predicted = design.dot(&coefficients);
    Ok(response.iter().zip(predicted.iter()).map(|(y, p)| (y - p).powi(2)).sum())
}
