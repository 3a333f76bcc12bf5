//! bridge::simulate — fixed-step integration of a continuous model.
//!
//! Purpose
//! -------
//! Generate the discretely sampled trajectory an experimentalist would
//! record from a continuous-time model: integrate the vector field with
//! classical fourth-order Runge–Kutta and keep one observation per
//! sampling interval. The resulting series feeds the autoregressive
//! fitting pipeline for end-to-end cross-validation against the
//! eigenvalue bridge.
//!
//! Key behaviors
//! -------------
//! - Each sampling interval `tau` is subdivided into `substeps` RK4
//!   steps; the observation function reads the state once per interval.
//! - The initial state is observed as sample zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - The field is smooth enough for RK4's accuracy; stiff systems need
//!   more substeps, which is the caller's call.

use crate::bridge::errors::{BridgeError, BridgeResult};

/// Integrate `field` from `initial` and record one observation per
/// sampling interval.
///
/// Parameters
/// ----------
/// - `field`:
///   The vector field `dx/dt = f(x)`.
/// - `initial`:
///   Starting state; observed as sample zero.
/// - `tau`:
///   Sampling interval.
/// - `n_samples`:
///   Number of observations to produce, including the initial one.
/// - `substeps`:
///   RK4 steps per sampling interval; at least 1.
/// - `observe`:
///   Scalar readout applied to the state at each sampling time.
///
/// Returns
/// -------
/// - `Ok(series)` of length `n_samples`.
///
/// Errors
/// ------
/// - `BridgeError::InvalidSampling` if `tau` is non-positive or
///   non-finite.
/// - `BridgeError::InvalidSubsteps` if `substeps` is zero.
/// - `BridgeError::DimensionMismatch` if the field's output length ever
///   differs from the state length.
/// - `BridgeError::NonFinite` if the state or an observation diverges.
pub fn simulate_sampled<F, O>(
    field: F,
    initial: &[f64],
    tau: f64,
    n_samples: usize,
    substeps: usize,
    observe: O,
) -> BridgeResult<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
    O: Fn(&[f64]) -> f64,
{
    if !(tau > 0.0 && tau.is_finite()) {
        return Err(BridgeError::InvalidSampling { tau, calibration: 1.0 });
    }
    if substeps == 0 {
        return Err(BridgeError::InvalidSubsteps);
    }

    let n = initial.len();
    let h = tau / substeps as f64;
    let mut state = initial.to_vec();
    let mut series = Vec::with_capacity(n_samples);

    for sample in 0..n_samples {
        if sample > 0 {
            for _ in 0..substeps {
                state = rk4_step(&field, &state, h, n)?;
            }
        }
        let value = observe(&state);
        if !value.is_finite() {
            return Err(BridgeError::NonFinite(value));
        }
        series.push(value);
    }
    Ok(series)
}

fn rk4_step<F>(field: &F, state: &[f64], h: f64, n: usize) -> BridgeResult<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let k1 = eval(field, state, n)?;
    let k2 = eval(field, &offset(state, &k1, h / 2.0), n)?;
    let k3 = eval(field, &offset(state, &k2, h / 2.0), n)?;
    let k4 = eval(field, &offset(state, &k3, h), n)?;

    let mut next = Vec::with_capacity(n);
    for i in 0..n {
        let increment = (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) * h / 6.0;
        let value = state[i] + increment;
        if !value.is_finite() {
            return Err(BridgeError::NonFinite(value));
        }
        next.push(value);
    }
    Ok(next)
}

fn eval<F>(field: &F, state: &[f64], n: usize) -> BridgeResult<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let out = field(state);
    if out.len() != n {
        return Err(BridgeError::DimensionMismatch { expected: n, found: out.len() });
    }
    Ok(out)
}

fn offset(state: &[f64], slope: &[f64], h: f64) -> Vec<f64> {
    state.iter().zip(slope.iter()).map(|(s, k)| s + h * k).collect()
}
