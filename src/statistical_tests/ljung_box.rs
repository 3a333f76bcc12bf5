//! statistical_tests::ljung_box — portmanteau test for residual
//! whiteness.
//!
//! Purpose
//! -------
//! Decide whether a fitted model's residuals are serially uncorrelated.
//! Remaining autocorrelation means the model left structure on the
//! table, usually an order chosen too low.
//!
//! Key behaviors
//! -------------
//! - The statistic is `Q = n (n + 2) * sum_{k=1..L} rho_k^2 / (n - k)`
//!   over the first `L` sample autocorrelations of the residuals.
//! - Under the null, `Q` is asymptotically chi-squared with
//!   `L - fitted` degrees of freedom, where `fitted` is the number of
//!   autoregressive parameters estimated before the residuals were
//!   formed. Pass `fitted = 0` when testing a raw series.
//! - `LjungBoxOutcome::white_at` compares the p-value against a chosen
//!   significance level.
//!
//! Invariants & assumptions
//! ------------------------
//! - `fitted < lags < n`, leaving at least one degree of freedom.
//! - The residual series is non-constant; a constant series is refused
//!   rather than scored.
//!
//! Downstream usage
//! ----------------
//! - Applied to `ARFit::residuals` after estimation, and to raw series
//!   (with `fitted = 0`) as a pre-fit structure check.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::statistical_tests::errors::{TestError, TestResult};
use crate::utils::{autocorrelation, variance};

/// LjungBoxOutcome — statistic and p-value of one portmanteau run.
///
/// Fields
/// ------
/// - `statistic`:
///   The Q statistic; non-negative.
/// - `df`:
///   Chi-squared degrees of freedom, `lags - fitted`.
/// - `p_value`:
///   Upper-tail probability of `statistic` under the null.
/// - `lags`:
///   Number of autocorrelations pooled into Q.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LjungBoxOutcome {
    pub statistic: f64,
    pub df: usize,
    pub p_value: f64,
    pub lags: usize,
}

impl LjungBoxOutcome {
    /// Whether the residuals pass as white noise at level `alpha`.
    pub fn white_at(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Run the Ljung–Box test on `residuals`.
///
/// Parameters
/// ----------
/// - `residuals`:
///   Residual (or raw) series to test.
/// - `lags`:
///   Number of autocorrelations to pool. A common choice is
///   `min(10, n / 5)` adjusted upward past `fitted`.
/// - `fitted`:
///   Number of parameters estimated before the residuals were formed;
///   subtracted from the degrees of freedom.
///
/// Returns
/// -------
/// - `Ok(LjungBoxOutcome)` with Q, the degrees of freedom, and the
///   p-value.
///
/// Errors
/// ------
/// - `TestError::InvalidLagCount` if `lags <= fitted` or `lags >= n`.
/// - `TestError::InsufficientData` if fewer than 3 observations.
/// - `TestError::InvalidData` on NaN or infinite entries.
/// - `TestError::ZeroVariance` if the series is constant.
///
/// Notes
/// -----
/// - The chi-squared construction cannot fail once `df >= 1`, which the
///   lag validation guarantees.
pub fn ljung_box(residuals: &[f64], lags: usize, fitted: usize) -> TestResult<LjungBoxOutcome> {
    let n = residuals.len();
    if n < 3 {
        return Err(TestError::InsufficientData { needed: 3, found: n });
    }
    if lags <= fitted || lags >= n {
        return Err(TestError::InvalidLagCount { lags, fitted });
    }
    for &value in residuals {
        if !value.is_finite() {
            return Err(TestError::InvalidData(value));
        }
    }
    if variance(residuals) == 0.0 {
        return Err(TestError::ZeroVariance);
    }

    let n_f = n as f64;
    let statistic = n_f
        * (n_f + 2.0)
        * (1..=lags)
            .map(|k| {
                let rho = autocorrelation(residuals, k);
                rho * rho / (n_f - k as f64)
            })
            .sum::<f64>();

    let df = lags - fitted;
    // df >= 1 by the lag validation above.
    let chi = ChiSquared::new(df as f64).expect("degrees of freedom validated to be >= 1");
    let p_value = 1.0 - chi.cdf(statistic);
    Ok(LjungBoxOutcome { statistic, df, p_value, lags })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};
    use rand_xoshiro::Xoshiro256PlusPlus;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover the white-noise null, a strongly autocorrelated
    // alternative, and lag validation. They intentionally DO NOT check
    // the exact chi-squared tail values beyond coarse thresholds.
    // -------------------------------------------------------------------------

    fn white_noise(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let normal = Normal::new(0.0, 1.0).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify white noise passes the test at the 5% level.
    //
    // Given
    // -----
    // - 300 draws of standard normal noise, 10 lags, no fitted
    //   parameters.
    //
    // Expect
    // ------
    // - `white_at(0.01)` true.
    fn white_noise_passes() {
        // Arrange
        let series = white_noise(300, 42);

        // Act
        let outcome = ljung_box(&series, 10, 0).unwrap();

        // Assert
        assert!(outcome.white_at(0.01), "p = {}", outcome.p_value);
        assert_eq!(outcome.df, 10);
    }

    #[test]
    // Purpose
    // -------
    // Verify a strongly autocorrelated series fails decisively.
    //
    // Given
    // -----
    // - A slow sine wave of 200 points, 10 lags.
    //
    // Expect
    // ------
    // - p-value essentially zero.
    fn autocorrelated_series_fails() {
        // Arrange
        let series: Vec<f64> = (0..200).map(|i| ((i as f64) * 0.2).sin()).collect();

        // Act
        let outcome = ljung_box(&series, 10, 0).unwrap();

        // Assert
        assert!(outcome.p_value < 1e-6, "p = {}", outcome.p_value);
        assert!(!outcome.white_at(0.05));
    }

    #[test]
    // Purpose
    // -------
    // Verify lag counts that leave no degrees of freedom are refused.
    //
    // Given
    // -----
    // - lags equal to fitted, and lags equal to the series length.
    //
    // Expect
    // ------
    // - `InvalidLagCount` in both cases.
    fn degenerate_lag_counts_are_refused() {
        // Arrange
        let series = white_noise(50, 7);

        // Act + Assert
        assert_eq!(
            ljung_box(&series, 2, 2),
            Err(TestError::InvalidLagCount { lags: 2, fitted: 2 })
        );
        assert_eq!(
            ljung_box(&series, 50, 0),
            Err(TestError::InvalidLagCount { lags: 50, fitted: 0 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify a constant series is refused rather than scored.
    //
    // Given
    // -----
    // - Twenty copies of 1.0.
    //
    // Expect
    // ------
    // - `ZeroVariance`.
    fn constant_series_is_refused() {
        // Arrange
        let series = [1.0; 20];

        // Act + Assert
        assert_eq!(ljung_box(&series, 5, 0), Err(TestError::ZeroVariance));
    }
}
