//! ar::selection — information-criterion model-order selection.
//!
//! Purpose
//! -------
//! Score candidate AR orders 1..=max under a Gaussian-residual likelihood
//! and report the AIC and BIC minimizers. The two criteria may disagree
//! (BIC penalizes harder); both are always reported, together with the
//! full per-order criterion table so callers can inspect the margin.
//!
//! Conventions
//! -----------
//! - The Gaussian log-likelihood is evaluated at the residual-variance
//!   MLE: ll = −(m/2)(ln(2π σ̂²) + 1) with m = n − p effective
//!   observations and σ̂² = SS_res/m.
//! - AIC = 2k − 2ll and BIC = k·ln(m) − 2ll with k = p estimated
//!   coefficients. Each order is scored on its own effective sample;
//!   with the short panels this crate targets the difference is
//!   immaterial and the criteria stay comparable.
//! - Ties break toward the smaller order (strict improvement required).

use crate::ar::errors::{ARError, ARResult};
use crate::ar::fit::{ARFit, AROptions, MAX_ORDER};
use crate::ar::validation::validate_series;

// Residual variance at or below this bound means an exact fit; no
// finite Gaussian likelihood exists.
const EXACT_FIT_EPS: f64 = 1e-300;

/// OrderCriteria — AIC/BIC score for one candidate order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderCriteria {
    pub order: usize,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
}

/// OrderSelection — result of scoring orders 1..=max_order.
///
/// Fields
/// ------
/// - `aic_order` / `bic_order`: `usize`
///   The AIC and BIC minimizers; they may legitimately disagree and
///   callers must not assume equality.
/// - `criteria`: `Vec<OrderCriteria>`
///   The full per-order table, ascending in order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSelection {
    pub aic_order: usize,
    pub bic_order: usize,
    pub criteria: Vec<OrderCriteria>,
}

/// Score AR orders 1..=`max_order` by AIC and BIC.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Time-ordered observations, long enough for the *largest* candidate
///   order (n >= 2·max_order + 1), all finite.
/// - `max_order`: `usize`
///   Largest candidate order, 1 <= max_order <= [`MAX_ORDER`].
///
/// Returns
/// -------
/// `ARResult<OrderSelection>`
///   Criterion table and both minimizers.
///
/// Errors
/// ------
/// - `ARError::InvalidOrder` / `ARError::InvalidData` /
///   `ARError::InsufficientData`
///   From validation at the largest candidate order.
/// - `ARError::DegenerateSeries`
///   When any candidate fit is degenerate or exact, so no Gaussian
///   likelihood can be formed; callers should treat the series as
///   unscorable rather than trusting a criterion built on σ̂² = 0.
pub fn select_order(series: &[f64], max_order: usize) -> ARResult<OrderSelection> {
    if max_order == 0 || max_order > MAX_ORDER {
        return Err(ARError::InvalidOrder(max_order));
    }
    validate_series(series, max_order)?;

    let mut criteria = Vec::with_capacity(max_order);
    for order in 1..=max_order {
        let fit = ARFit::fit(series, order, &AROptions::default())?;
        if fit.degenerate {
            return Err(ARError::DegenerateSeries);
        }
        let m = fit.residuals.len() as f64;
        let sigma2 = fit.residuals.dot(&fit.residuals) / m;
        if sigma2 <= EXACT_FIT_EPS {
            return Err(ARError::DegenerateSeries);
        }
        let log_likelihood = -0.5 * m * ((2.0 * std::f64::consts::PI * sigma2).ln() + 1.0);
        let k = order as f64;
        criteria.push(OrderCriteria {
            order,
            log_likelihood,
            aic: 2.0 * k - 2.0 * log_likelihood,
            bic: k * m.ln() - 2.0 * log_likelihood,
        });
    }

    let aic_order = argmin_by(&criteria, |c| c.aic);
    let bic_order = argmin_by(&criteria, |c| c.bic);
    Ok(OrderSelection { aic_order, bic_order, criteria })
}

// Smallest order attaining the minimum (strict improvement required).
fn argmin_by<F: Fn(&OrderCriteria) -> f64>(criteria: &[OrderCriteria], key: F) -> usize {
    let mut best = criteria[0].order;
    let mut best_val = key(&criteria[0]);
    for c in &criteria[1..] {
        let val = key(c);
        if val < best_val {
            best_val = val;
            best = c.order;
        }
    }
    best
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
    // These tests cover:
    // - Selection of the true order on a strongly identified AR(2).
    // - The full criterion table shape and reporting of both criteria.
    // - The degenerate-series error path.
    //
    // They intentionally DO NOT cover:
    // - Asymptotic consistency of AIC vs BIC; that is a simulation-study
    //   question, not a unit-test one.
    // -------------------------------------------------------------------------

    fn noisy_ar2(phi1: f64, phi2: f64, n: usize, sigma: f64, seed: u64) -> Vec<f64> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let noise = Normal::new(0.0, sigma).expect("positive sigma");
        let mut x = vec![0.0, 0.0];
        for t in 2..n {
            let next = phi1 * x[t - 1] + phi2 * x[t - 2] + noise.sample(&mut rng);
            x.push(next);
        }
        x
    }

    #[test]
    // Purpose
    // -------
    // Verify the criteria find the true order of a long, strongly
    // autocorrelated AR(2) series.
    //
    // Given
    // -----
    // - x_t = 1.2 x_{t-1} - 0.5 x_{t-2} + ε, n = 500, σ = 0.5, fixed
    //   seed.
    //
    // Expect
    // ------
    // - `bic_order == 2`; AIC never underfits the strong lag-2 signal
    //   (it retains a known small chance of picking order 3, so only a
    //   lower bound is pinned); the table has 3 rows.
    fn select_order_finds_true_ar2_order() {
        // Arrange
        let series = noisy_ar2(1.2, -0.5, 500, 0.5, 42);

        // Act
        let selection = select_order(&series, 3).expect("valid input");

        // Assert
        assert_eq!(selection.criteria.len(), 3);
        assert_eq!(selection.bic_order, 2, "criteria: {:?}", selection.criteria);
        assert!(selection.aic_order >= 2, "criteria: {:?}", selection.criteria);
    }

    #[test]
    // Purpose
    // -------
    // Verify the criterion table carries finite, internally consistent
    // scores (BIC >= AIC once ln(m) > 2, for every order).
    //
    // Given
    // -----
    // - Any non-degenerate series with n = 200 (so ln(m) > 2).
    //
    // Expect
    // ------
    // - All scores finite; bic > aic at each order.
    fn criterion_table_is_finite_and_ordered() {
        // Arrange
        let series = noisy_ar2(0.6, 0.2, 200, 1.0, 7);

        // Act
        let selection = select_order(&series, 3).expect("valid input");

        // Assert
        for c in &selection.criteria {
            assert!(c.aic.is_finite() && c.bic.is_finite() && c.log_likelihood.is_finite());
            assert!(c.bic > c.aic, "order {}: bic {} aic {}", c.order, c.bic, c.aic);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify a constant series is reported as unscorable.
    //
    // Given
    // -----
    // - A constant series of length 30.
    //
    // Expect
    // ------
    // - `ARError::DegenerateSeries`.
    fn constant_series_is_unscorable() {
        // Arrange
        let series = vec![1.0; 30];

        // Act & Assert
        assert!(matches!(select_order(&series, 3), Err(ARError::DegenerateSeries)));
    }
}
