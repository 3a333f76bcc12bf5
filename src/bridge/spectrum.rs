//! bridge::spectrum — eigenvalues of small system matrices.
//!
//! Purpose
//! -------
//! Compute the eigenvalue spectrum of a continuous-time system's
//! Jacobian (dimensions 1 through 4) so it can be pushed through the
//! sampling map and compared with a discretely fitted dominant modulus.
//!
//! Key behaviors
//! -------------
//! - Dimensions 1 through 3 go through the closed-form characteristic
//!   polynomial machinery: trace, principal-minor sums, and determinant
//!   feed the same quadratic and cubic solvers used for fitted models.
//! - Dimension 4 falls back to the QR eigenvalue iteration.
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned spectrum has exactly `n` entries for an `n`-dim
//!   matrix, complex pairs listed non-negative-imaginary first.

use ndarray::Array2;
use num_complex::Complex64;

use crate::bridge::errors::{BridgeError, BridgeResult};
use crate::bridge::jacobian::jacobian;
use crate::linalg::errors::LinAlgError;
use crate::linalg::qr::{eigenvalues, QrOptions};
use crate::roots::extract::{cubic_roots, quadratic_roots};

/// Eigenvalues of a small square matrix.
///
/// Parameters
/// ----------
/// - `matrix`:
///   A square matrix of dimension 1 through 4.
///
/// Returns
/// -------
/// - `Ok(spectrum)` with one eigenvalue per dimension.
///
/// Errors
/// ------
/// - `BridgeError::UnsupportedDimension` for dimension 0 or above 4.
/// - `BridgeError::NonFinite` for NaN or infinite entries.
/// - `BridgeError::LinAlg` if the matrix is not square or the dimension-4
///   QR iteration fails to converge.
pub fn matrix_eigenvalues(matrix: &Array2<f64>) -> BridgeResult<Vec<Complex64>> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(BridgeError::LinAlg(LinAlgError::NotSquare {
            rows: n,
            cols: matrix.ncols(),
        }));
    }
    if n == 0 || n > 4 {
        return Err(BridgeError::UnsupportedDimension(n));
    }
    for &value in matrix.iter() {
        if !value.is_finite() {
            return Err(BridgeError::NonFinite(value));
        }
    }

    let spectrum = match n {
        1 => vec![Complex64::new(matrix[[0, 0]], 0.0)],
        2 => {
            // lambda^2 = tr * lambda - det, in recurrence form.
            let tr = matrix[[0, 0]] + matrix[[1, 1]];
            let det = matrix[[0, 0]] * matrix[[1, 1]] - matrix[[0, 1]] * matrix[[1, 0]];
            quadratic_roots(tr, -det).into_iter().map(|r| r.value).collect()
        }
        3 => {
            // lambda^3 = tr * lambda^2 - m2 * lambda + det, where m2 is
            // the sum of the principal 2x2 minors.
            let tr = matrix[[0, 0]] + matrix[[1, 1]] + matrix[[2, 2]];
            let m2 = principal_minor(matrix, 0, 1)
                + principal_minor(matrix, 0, 2)
                + principal_minor(matrix, 1, 2);
            let det = det3(matrix);
            cubic_roots(tr, -m2, det).into_iter().map(|r| r.value).collect()
        }
        _ => eigenvalues(matrix, &QrOptions::default())?,
    };
    Ok(spectrum)
}

/// Eigenvalues of the finite-difference Jacobian of `field` at `state`.
pub fn jacobian_eigenvalues<F>(field: F, state: &[f64]) -> BridgeResult<Vec<Complex64>>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let j = jacobian(field, state)?;
    matrix_eigenvalues(&j)
}

fn principal_minor(m: &Array2<f64>, i: usize, j: usize) -> f64 {
    m[[i, i]] * m[[j, j]] - m[[i, j]] * m[[j, i]]
}

fn det3(m: &Array2<f64>) -> f64 {
    m[[0, 0]] * (m[[1, 1]] * m[[2, 2]] - m[[1, 2]] * m[[2, 1]])
        - m[[0, 1]] * (m[[1, 0]] * m[[2, 2]] - m[[1, 2]] * m[[2, 0]])
        + m[[0, 2]] * (m[[1, 0]] * m[[2, 1]] - m[[1, 1]] * m[[2, 0]])
}
