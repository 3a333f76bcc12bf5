//! bridge::jacobian — finite-difference Jacobian of a vector field.
//!
//! Purpose
//! -------
//! Estimate the Jacobian matrix of a continuous-time vector field at a
//! state of interest, typically a fixed point or a point on a limit
//! cycle, so its eigenvalues can be compared against a discretely
//! sampled fit.
//!
//! Key behaviors
//! -------------
//! - Central differences with a fixed step: column `j` is
//!   `(f(x + h e_j) - f(x - h e_j)) / (2 h)`.
//! - The field is probed once per column pair; its output length is
//!   checked against the state dimension on every call.
//!
//! Invariants & assumptions
//! ------------------------
//! - The field is twice differentiable near `state`, so the central
//!   stencil's O(h²) error applies.
//! - States are small (dimension <= 4 downstream), so dense columns are
//!   fine.

use ndarray::Array2;

use crate::bridge::errors::{BridgeError, BridgeResult};

/// Central-difference step. Near the square root of f64 machine epsilon
/// scaled for states of order one.
pub const FD_EPSILON: f64 = 1e-6;

/// Estimate the Jacobian of `field` at `state` by central differences.
///
/// Parameters
/// ----------
/// - `field`:
///   The vector field `dx/dt = f(x)`. Must return one component per
///   state entry.
/// - `state`:
///   Evaluation point.
///
/// Returns
/// -------
/// - `Ok(J)` with `J[[i, j]] = d f_i / d x_j`.
///
/// Errors
/// ------
/// - `BridgeError::DimensionMismatch` if the field's output length ever
///   differs from the state length.
/// - `BridgeError::NonFinite` if the state or any probe output contains
///   NaN or infinity.
pub fn jacobian<F>(field: F, state: &[f64]) -> BridgeResult<Array2<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let n = state.len();
    for &value in state {
        if !value.is_finite() {
            return Err(BridgeError::NonFinite(value));
        }
    }

    let mut matrix = Array2::zeros((n, n));
    let mut probe = state.to_vec();
    for j in 0..n {
        probe[j] = state[j] + FD_EPSILON;
        let forward = checked_probe(&field, &probe, n)?;
        probe[j] = state[j] - FD_EPSILON;
        let backward = checked_probe(&field, &probe, n)?;
        probe[j] = state[j];

        for i in 0..n {
            matrix[[i, j]] = (forward[i] - backward[i]) / (2.0 * FD_EPSILON);
        }
    }
    Ok(matrix)
}

fn checked_probe<F>(field: &F, state: &[f64], n: usize) -> BridgeResult<Vec<f64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let out = field(state);
    if out.len() != n {
        return Err(BridgeError::DimensionMismatch { expected: n, found: out.len() });
    }
    for &value in &out {
        if !value.is_finite() {
            return Err(BridgeError::NonFinite(value));
        }
    }
    Ok(out)
}
