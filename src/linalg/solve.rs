//! linalg::solve — Gaussian elimination with partial pivoting.
//!
//! Purpose
//! -------
//! Solve dense square systems Ax = b by Gaussian elimination with partial
//! pivoting and back-substitution. This routine underlies every
//! normal-equation solve in the crate — AR estimation, Granger regressions,
//! and cross-validation fits — so its correctness is foundational.
//!
//! Key behaviors
//! -------------
//! - Select, at each elimination step, the row with the largest absolute
//!   leading entry (partial pivoting) to bound numerical error.
//! - Signal [`LinAlgError::Singular`] when no pivot exceeds [`PIVOT_EPS`]
//!   after pivot selection, rather than dividing by a tiny value.
//! - Validate shapes and finiteness before any arithmetic begins so a NaN
//!   never propagates silently into a caller's result.
//!
//! Invariants & assumptions
//! ------------------------
//! - The coefficient matrix is square and finite; the right-hand side has
//!   matching length. Violations are reported as structured errors, never
//!   discovered mid-computation.
//! - The returned solution vector is finite; a non-finite back-substitution
//!   result is reported as [`LinAlgError::NonFinite`].
//!
//! Downstream usage
//! ----------------
//! - `ar::fit` solves the (optionally ridge-augmented) normal equations and
//!   maps `Singular` into a degenerate zero-coefficient model.
//! - `statistical_tests::granger` and `resampling::cross_validation` solve
//!   per-regression normal equations and propagate `Singular` to callers.

use ndarray::{Array1, Array2};

use crate::linalg::errors::{LinAlgError, LinAlgResult};

/// Pivot tolerance: a pivot with absolute value at or below this bound is
/// treated as zero and the system reported as singular.
pub const PIVOT_EPS: f64 = 1e-10;

/// Solve the square system Ax = b by partial-pivoting Gaussian elimination.
///
/// Parameters
/// ----------
/// - `a`: `&Array2<f64>`
///   Square coefficient matrix (n x n) with finite entries. The matrix is
///   copied internally; the caller's value is not modified.
/// - `b`: `&Array1<f64>`
///   Right-hand-side vector of length n with finite entries.
///
/// Returns
/// -------
/// `LinAlgResult<Array1<f64>>`
///   The solution vector x of length n, with every entry finite.
///
/// Errors
/// ------
/// - `LinAlgError::NotSquare`
///   When `a` is not square.
/// - `LinAlgError::DimensionMismatch`
///   When `b.len() != a.nrows()`.
/// - `LinAlgError::NonFinite`
///   When any input entry, or any entry of the computed solution, is NaN
///   or infinite.
/// - `LinAlgError::Singular`
///   When, at some elimination column, no candidate pivot exceeds
///   [`PIVOT_EPS`] in absolute value.
///
/// Panics
/// ------
/// - Never panics under the documented invariants; all invalid inputs are
///   surfaced as `LinAlgError` values.
///
/// Notes
/// -----
/// - Elimination works on a private copy of A and b, swapping whole rows
///   when a better pivot is found below the diagonal.
/// - An empty system (n = 0) solves trivially to an empty vector.
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> LinAlgResult<Array1<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinAlgError::NotSquare { rows: n, cols: a.ncols() });
    }
    if b.len() != n {
        return Err(LinAlgError::DimensionMismatch { expected: n, found: b.len() });
    }
    for &v in a.iter().chain(b.iter()) {
        if !v.is_finite() {
            return Err(LinAlgError::NonFinite { value: v });
        }
    }

    let mut m = a.clone();
    let mut rhs = b.clone();

    // Forward elimination with row pivoting.
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = m[[col, col]].abs();
        for row in (col + 1)..n {
            let mag = m[[row, col]].abs();
            if mag > pivot_mag {
                pivot_row = row;
                pivot_mag = mag;
            }
        }
        if pivot_mag <= PIVOT_EPS {
            return Err(LinAlgError::Singular { column: col });
        }
        if pivot_row != col {
            for c in 0..n {
                m.swap([col, c], [pivot_row, c]);
            }
            rhs.swap(col, pivot_row);
        }
        for row in (col + 1)..n {
            let factor = m[[row, col]] / m[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                m[[row, c]] -= factor * m[[col, c]];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back-substitution.
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut acc = rhs[i];
        for j in (i + 1)..n {
            acc -= m[[i, j]] * x[j];
        }
        x[i] = acc / m[[i, i]];
    }

    for &v in x.iter() {
        if !v.is_finite() {
            return Err(LinAlgError::NonFinite { value: v });
        }
    }
    Ok(x)
}
