//! bridge::discrete — map continuous eigenvalues to a sampled modulus.
//!
//! Purpose
//! -------
//! Translate the eigenvalue spectrum of a continuous-time model into
//! the dominant characteristic-root modulus an autoregressive fit of
//! the same system, sampled every `tau` time units, should report, and
//! score how well a fitted modulus agrees with that prediction.
//!
//! Key behaviors
//! -------------
//! - A continuous eigenvalue `lambda` becomes the discrete root
//!   `exp(lambda * tau)`, whose modulus is `exp(Re(lambda) * tau)`. The
//!   predicted modulus is the maximum over the spectrum, times an
//!   explicit calibration factor.
//! - `agreement` is a symmetric relative score in [0, 1]:
//!   `1 - |p - a| / max(p, a)`, with two zero moduli scoring a perfect 1.
//!
//! Invariants & assumptions
//! ------------------------
//! - `tau` and `calibration` are positive and finite; both are explicit
//!   configuration, never hidden constants.
//! - The spectrum is non-empty and finite.
//!
//! Downstream usage
//! ----------------
//! - Cross-validates an `ARFit`'s `dominant_modulus` against an ODE
//!   model of the same system via `bridge::spectrum`.

use num_complex::Complex64;

use crate::bridge::errors::{BridgeError, BridgeResult};

/// BridgeConfig — sampling interval and calibration for the bridge.
///
/// Fields
/// ------
/// - `tau`:
///   Sampling interval of the discrete series, in the continuous
///   model's time units.
/// - `calibration`:
///   Multiplicative correction applied to the predicted modulus,
///   absorbing known discretization bias. `1.0` means no correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeConfig {
    pub tau: f64,
    pub calibration: f64,
}

impl BridgeConfig {
    /// Build a config with no calibration correction.
    ///
    /// Errors
    /// ------
    /// - `BridgeError::InvalidSampling` if `tau` is non-positive or
    ///   non-finite.
    pub fn new(tau: f64) -> BridgeResult<Self> {
        Self::with_calibration(tau, 1.0)
    }

    /// Build a config with an explicit calibration factor.
    ///
    /// Errors
    /// ------
    /// - `BridgeError::InvalidSampling` if either value is non-positive
    ///   or non-finite.
    pub fn with_calibration(tau: f64, calibration: f64) -> BridgeResult<Self> {
        if !(tau > 0.0 && tau.is_finite() && calibration > 0.0 && calibration.is_finite()) {
            return Err(BridgeError::InvalidSampling { tau, calibration });
        }
        Ok(BridgeConfig { tau, calibration })
    }
}

/// Dominant discrete modulus predicted by a continuous spectrum.
///
/// Parameters
/// ----------
/// - `spectrum`:
///   Continuous-time eigenvalues, typically from
///   `bridge::spectrum::matrix_eigenvalues`.
/// - `config`:
///   Sampling interval and calibration.
///
/// Returns
/// -------
/// - `Ok(modulus)`, the calibrated maximum of `exp(Re(lambda) * tau)`.
///
/// Errors
/// ------
/// - `BridgeError::EmptySpectrum` if `spectrum` is empty.
/// - `BridgeError::NonFinite` if any eigenvalue has a non-finite part.
pub fn predicted_discrete_modulus(
    spectrum: &[Complex64],
    config: &BridgeConfig,
) -> BridgeResult<f64> {
    if spectrum.is_empty() {
        return Err(BridgeError::EmptySpectrum);
    }
    let mut max_re = f64::NEG_INFINITY;
    for z in spectrum {
        if !z.re.is_finite() || !z.im.is_finite() {
            return Err(BridgeError::NonFinite(if z.re.is_finite() { z.im } else { z.re }));
        }
        if z.re > max_re {
            max_re = z.re;
        }
    }
    Ok((max_re * config.tau).exp() * config.calibration)
}

/// Relative agreement between a predicted and a fitted modulus.
///
/// Returns
/// -------
/// - `1 - |predicted - actual| / max(predicted, actual)`, clamped to
///   [0, 1]. Two exact zeros agree perfectly.
///
/// Notes
/// -----
/// - Symmetric in its arguments, so neither modulus plays the role of
///   ground truth.
pub fn agreement(predicted: f64, actual: f64) -> f64 {
    let scale = predicted.max(actual);
    if scale == 0.0 {
        return 1.0;
    }
    (1.0 - (predicted - actual).abs() / scale).max(0.0)
}
