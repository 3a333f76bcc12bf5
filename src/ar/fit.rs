//! ar::fit — least-squares estimation of AR(p) models.
//!
//! Purpose
//! -------
//! Fit autoregressive models of order 1-3 to a numeric series by solving
//! the (optionally ridge-regularized) normal equations over a lagged design
//! matrix, and package the immutable result — coefficients, residuals,
//! coefficient of determination, and a degeneracy flag — as [`ARFit`].
//!
//! Key behaviors
//! -------------
//! - Center the series (mean subtraction) before building the p lagged
//!   design columns and the contemporaneous response.
//! - Solve XᵀX + λI = Xᵀy through `linalg::solve`; a singular Gram matrix
//!   or a zero-variance series yields a *degenerate* zero-coefficient model
//!   returned `Ok`, never a propagated NaN.
//! - Compute R² as 1 − SS_res/SS_tot about the response-window mean,
//!   defined as 0 when SS_tot is 0.
//! - Expose the characteristic-root surface ([`ARFit::roots`],
//!   [`ARFit::dominant_modulus`]) by delegating to `roots::extract`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `validate_series` has guaranteed n >= 2p + 1 and finite data before
//!   any arithmetic.
//! - A degenerate model has zero coefficients, zero residuals, R² = 0, and
//!   `degenerate = true`; its dominant-root modulus is reported as 0.
//!   Callers MUST branch on `degenerate` — downstream classification
//!   treats it as missing data, not as "perfectly stable" (see
//!   `stability::classify_fit`).
//!
//! Downstream usage
//! ----------------
//! - Every higher-level routine (order selection, cross-validation of AR
//!   designs, the bridge's empirical arm, per-gene batch fits) calls
//!   [`ARFit::fit`] rather than re-deriving normal equations locally.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact recovery on noiseless AR recurrences, the
//!   degenerate constant-series path, ridge shrinkage direction, and R²
//!   bounds. Statistical recovery from noisy series is exercised in the
//!   integration tests.

use ndarray::{Array1, Array2};

use crate::ar::errors::{ARError, ARResult};
use crate::ar::validation::validate_series;
use crate::linalg::errors::LinAlgError;
use crate::linalg::solve::solve;
use crate::roots::errors::RootResult;
use crate::roots::extract::extract_roots;
use crate::roots::types::{dominant_root, Root};
use crate::utils;

/// Largest supported AR order.
pub const MAX_ORDER: usize = 3;

// Series variance at or below this bound is treated as zero (constant
// series, degenerate fit).
const ZERO_VARIANCE_EPS: f64 = 1e-12;

/// AROptions — estimation options.
///
/// Fields
/// ------
/// - `ridge`: `f64`
///   Non-negative penalty λ added to the Gram-matrix diagonal. Zero (the
///   default) is ordinary least squares; small positive values stabilize
///   near-collinear designs at the cost of biasing coefficients toward
///   zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AROptions {
    pub ridge: f64,
}

impl Default for AROptions {
    fn default() -> Self {
        AROptions { ridge: 0.0 }
    }
}

/// ARFit — immutable result of one AR(p) estimation.
///
/// Purpose
/// -------
/// Hold everything downstream consumers need from a fit: the coefficient
/// vector (length p), the fitted residuals (length n − p), the coefficient
/// of determination, and whether the fit is degenerate. Produced once per
/// estimation call and never mutated.
///
/// Fields
/// ------
/// - `order`: `usize`
///   The order p the model was fitted at.
/// - `coefficients`: `Array1<f64>`
///   (φ₁, …, φₚ) in the AR recurrence orientation; all zeros for a
///   degenerate fit.
/// - `residuals`: `Array1<f64>`
///   One residual per design row (length n − p); all zeros for a
///   degenerate fit.
/// - `r2`: `f64`
///   1 − SS_res/SS_tot about the response-window mean; 0 when SS_tot is 0.
/// - `degenerate`: `bool`
///   True when the series had (near-)zero variance or the Gram matrix was
///   singular within tolerance. A degenerate modulus of 0 means "no
///   estimate", not "perfectly stable".
///
/// Invariants
/// ----------
/// - `coefficients.len() == order` and
///   `residuals.len() == series.len() - order` for the originating call.
/// - All stored values are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct ARFit {
    pub order: usize,
    pub coefficients: Array1<f64>,
    pub residuals: Array1<f64>,
    pub r2: f64,
    pub degenerate: bool,
}

impl ARFit {
    /// Fit an AR(p) model to `series` by (ridge) least squares.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&[f64]`
    ///   Time-ordered observations, length >= 2p + 1, all finite. The
    ///   series is centered internally; callers may pass raw values.
    /// - `order`: `usize`
    ///   AR order p, 1 <= p <= [`MAX_ORDER`].
    /// - `opts`: `&AROptions`
    ///   Ridge penalty (>= 0, finite).
    ///
    /// Returns
    /// -------
    /// `ARResult<ARFit>`
    ///   The fitted model. Degenerate input — a constant series, or a
    ///   design whose Gram matrix is singular within the pivot tolerance —
    ///   returns `Ok` with `degenerate = true` and zero coefficients, so
    ///   statistically meaningless-but-well-formed input never raises.
    ///
    /// Errors
    /// ------
    /// - `ARError::InvalidOrder` / `ARError::InvalidData` /
    ///   `ARError::InsufficientData`
    ///   From up-front validation (see `ar::validation`).
    /// - `ARError::InvalidRidge`
    ///   When `opts.ridge` is negative or non-finite.
    /// - `ARError::LinAlg`
    ///   Only for non-singularity solver failures, which indicate a
    ///   programming error upstream rather than bad user data.
    ///
    /// Notes
    /// -----
    /// - Design row t (t = p..n-1) has columns
    ///   (x̃ₜ₋₁, …, x̃ₜ₋ₚ) and response x̃ₜ, where x̃ is the centered
    ///   series; the normal equations are solved with partial pivoting.
    pub fn fit(series: &[f64], order: usize, opts: &AROptions) -> ARResult<ARFit> {
        validate_series(series, order)?;
        if !opts.ridge.is_finite() || opts.ridge < 0.0 {
            return Err(ARError::InvalidRidge(opts.ridge));
        }

        let n = series.len();
        if utils::variance(series) <= ZERO_VARIANCE_EPS {
            return Ok(ARFit::degenerate(order, n));
        }

        let centered = utils::center(series);
        let rows = n - order;
        let mut x = Array2::<f64>::zeros((rows, order));
        let mut y = Array1::<f64>::zeros(rows);
        for i in 0..rows {
            let t = order + i;
            for j in 0..order {
                x[[i, j]] = centered[t - 1 - j];
            }
            y[i] = centered[t];
        }

        let mut gram = x.t().dot(&x);
        if opts.ridge > 0.0 {
            for j in 0..order {
                gram[[j, j]] += opts.ridge;
            }
        }
        let rhs = x.t().dot(&y);

        let phi = match solve(&gram, &rhs) {
            Ok(phi) => phi,
            Err(LinAlgError::Singular { .. }) => return Ok(ARFit::degenerate(order, n)),
            Err(err) => return Err(err.into()),
        };

        let residuals = &y - &x.dot(&phi);
        let ss_res = residuals.dot(&residuals);
        let y_mean = y.sum() / rows as f64;
        let ss_tot = y.iter().map(|&v| (v - y_mean) * (v - y_mean)).sum::<f64>();
        let r2 = if ss_tot == 0.0 { 0.0 } else { 1.0 - ss_res / ss_tot };

        Ok(ARFit { order, coefficients: phi, residuals, r2, degenerate: false })
    }

    /// Characteristic roots of the fitted coefficients.
    pub fn roots(&self) -> RootResult<Vec<Root>> {
        let coeffs = self.coefficients.to_vec();
        extract_roots(&coeffs)
    }

    /// Modulus of the dominant characteristic root; 0 for a degenerate
    /// fit (callers should treat that 0 as missing, not as stability —
    /// check [`ARFit::degenerate`](ARFit) first).
    pub fn dominant_modulus(&self) -> RootResult<f64> {
        if self.degenerate {
            return Ok(0.0);
        }
        Ok(self.roots()?.iter().map(|r| r.modulus).fold(0.0, f64::max))
    }

    /// The dominant root itself (deterministic tie-break); `None` for a
    /// degenerate fit.
    pub fn dominant(&self) -> RootResult<Option<Root>> {
        if self.degenerate {
            return Ok(None);
        }
        Ok(dominant_root(&self.roots()?))
    }

    // Zero-coefficient model used for constant or collinear input.
    fn degenerate(order: usize, n: usize) -> ARFit {
        ARFit {
            order,
            coefficients: Array1::zeros(order),
            residuals: Array1::zeros(n - order),
            r2: 0.0,
            degenerate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact coefficient recovery from noiseless AR(1) and AR(2)
    //   recurrences.
    // - The degenerate path for constant series and its modulus-0
    //   contract.
    // - Ridge shrinkage direction and ridge validation.
    // - R² bounds on a noiseless fit.
    //
    // They intentionally DO NOT cover:
    // - Statistical recovery under noise (integration tests) or root
    //   arithmetic (roots module tests).
    // -------------------------------------------------------------------------

    // Noiseless AR(2) recurrence from fixed initial values.
    fn ar2_series(phi1: f64, phi2: f64, n: usize) -> Vec<f64> {
        let mut x = vec![1.0, 0.5];
        for t in 2..n {
            let next = phi1 * x[t - 1] + phi2 * x[t - 2];
            x.push(next);
        }
        x
    }

    #[test]
    // Purpose
    // -------
    // Verify exact recovery of AR(2) coefficients from a noiseless
    // zero-mean recurrence.
    //
    // Given
    // -----
    // - x_t = cos(2πt/20) over exactly three periods (n = 60), which
    //   satisfies x_t = 2cos(π/10) x_{t-1} - x_{t-2} with a sample mean
    //   of exactly zero, so centering leaves the recurrence intact.
    //
    // Expect
    // ------
    // - Fitted (φ₁, φ₂) within 1e-8 of (2cos(π/10), -1); residuals near
    //   zero; R² within 1e-8 of 1.
    fn fit_recovers_noiseless_ar2_exactly() {
        // Arrange
        let omega = std::f64::consts::PI / 10.0;
        let series: Vec<f64> = (0..60).map(|t| (omega * t as f64).cos()).collect();
        let phi1 = 2.0 * omega.cos();

        // Act
        let fit = ARFit::fit(&series, 2, &AROptions::default()).expect("valid input");

        // Assert
        assert!(!fit.degenerate);
        assert!((fit.coefficients[0] - phi1).abs() < 1e-8, "phi1 = {}", fit.coefficients[0]);
        assert!((fit.coefficients[1] + 1.0).abs() < 1e-8, "phi2 = {}", fit.coefficients[1]);
        assert!((fit.r2 - 1.0).abs() < 1e-8, "r2 = {}", fit.r2);
        assert!(fit.residuals.iter().all(|r| r.abs() < 1e-8));
    }

    #[test]
    // Purpose
    // -------
    // Verify a constant series yields the degenerate zero-coefficient
    // model rather than an error or NaN.
    //
    // Given
    // -----
    // - A constant series of length 10, order 2.
    //
    // Expect
    // ------
    // - `degenerate == true`, zero coefficients, R² = 0, dominant
    //   modulus 0, `dominant()` is `None`.
    fn fit_constant_series_is_degenerate_not_error() {
        // Arrange
        let series = vec![3.25; 10];

        // Act
        let fit = ARFit::fit(&series, 2, &AROptions::default()).expect("well-formed input");

        // Assert
        assert!(fit.degenerate);
        assert!(fit.coefficients.iter().all(|&c| c == 0.0));
        assert_eq!(fit.r2, 0.0);
        assert_eq!(fit.residuals.len(), 8);
        assert_eq!(fit.dominant_modulus().expect("degenerate contract"), 0.0);
        assert!(fit.dominant().expect("degenerate contract").is_none());
    }

    #[test]
    // Purpose
    // -------
    // Verify ridge regularization shrinks coefficient magnitude relative
    // to the OLS fit on the same series.
    //
    // Given
    // -----
    // - A noiseless AR(1)-like series and ridge penalties 0 and 10.
    //
    // Expect
    // ------
    // - |φ₁(ridge=10)| < |φ₁(ridge=0)|, and both fits succeed.
    fn ridge_shrinks_coefficients_toward_zero() {
        // Arrange
        let mut series = vec![2.0];
        for t in 1..40 {
            series.push(0.8 * series[t - 1] + if t % 2 == 0 { 0.05 } else { -0.05 });
        }

        // Act
        let ols = ARFit::fit(&series, 1, &AROptions::default()).expect("valid input");
        let ridged = ARFit::fit(&series, 1, &AROptions { ridge: 10.0 }).expect("valid input");

        // Assert
        assert!(
            ridged.coefficients[0].abs() < ols.coefficients[0].abs(),
            "ridge {} should shrink below OLS {}",
            ridged.coefficients[0],
            ols.coefficients[0]
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify negative and non-finite ridge penalties are rejected.
    //
    // Given
    // -----
    // - ridge = -1.0 and ridge = NaN on a valid series.
    //
    // Expect
    // ------
    // - `ARError::InvalidRidge` for both.
    fn invalid_ridge_rejected() {
        // Arrange
        let series = ar2_series(0.5, 0.1, 20);

        // Act & Assert
        assert!(matches!(
            ARFit::fit(&series, 2, &AROptions { ridge: -1.0 }),
            Err(ARError::InvalidRidge(_))
        ));
        assert!(matches!(
            ARFit::fit(&series, 2, &AROptions { ridge: f64::NAN }),
            Err(ARError::InvalidRidge(_))
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the dominant modulus of a fitted stable AR(2) matches the
    // analytic value of the generating coefficients.
    //
    // Given
    // -----
    // - Noiseless x_t = 1.0 x_{t-1} - 0.5 x_{t-2} (complex pair, modulus
    //   √0.5). The decaying series has a small nonzero sample mean, so
    //   centering perturbs the recurrence slightly.
    //
    // Expect
    // ------
    // - `dominant_modulus()` within 0.02 of √0.5.
    fn dominant_modulus_matches_generating_process() {
        // Arrange
        let series = ar2_series(1.0, -0.5, 80);

        // Act
        let fit = ARFit::fit(&series, 2, &AROptions::default()).expect("valid input");
        let modulus = fit.dominant_modulus().expect("non-degenerate");

        // Assert
        assert!(
            (modulus - 0.5_f64.sqrt()).abs() < 0.02,
            "expected {} got {modulus}",
            0.5_f64.sqrt()
        );
    }
}
