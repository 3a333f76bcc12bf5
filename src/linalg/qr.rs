//! linalg::qr — Gram–Schmidt QR decomposition and eigenvalue iteration.
//!
//! Purpose
//! -------
//! Extract the eigenvalues of small dense matrices (up to 4x4) by repeated
//! QR decomposition. The iterate A_{k+1} = R_k Q_k converges to a
//! quasi-upper-triangular form whose diagonal carries real eigenvalues and
//! whose residual 2x2 diagonal blocks carry complex-conjugate pairs. This is
//! the shared backend for degree-4 characteristic polynomials (via their
//! companion matrix) and for 4x4 Jacobian spectra in the ODE bridge.
//!
//! Key behaviors
//! -------------
//! - Decompose A = QR by classical Gram–Schmidt orthogonalization, with an
//!   orthonormal-completion fallback for rank-deficient columns so that
//!   singular matrices (zero eigenvalues) iterate correctly.
//! - Iterate to a residual off-diagonal threshold with a safety cap, and
//!   report [`LinAlgError::NonConvergence`] as a distinct error rather than
//!   returning an unconverged spectrum silently.
//! - Resolve each surviving 2x2 diagonal block into a conjugate pair via its
//!   own trace/determinant formula; isolated diagonal entries are real
//!   eigenvalues directly.
//!
//! Invariants & assumptions
//! ------------------------
//! - Matrices are square, finite, and of dimension 1..=4; larger systems are
//!   outside the crate's scope and rejected up front.
//! - Convergence is judged against a threshold scaled by the matrix
//!   magnitude, so the tolerance behaves consistently across input scales.
//! - A persistent 2x2 subdiagonal block is *not* a convergence failure: it
//!   is the expected signature of a complex pair (or an equal-modulus real
//!   pair) and is resolved analytically.
//!
//! Downstream usage
//! ----------------
//! - `roots::extract` builds the companion matrix of a degree-4
//!   characteristic polynomial and calls [`eigenvalues`].
//! - `bridge::spectrum` calls [`eigenvalues`] directly on 4x4 Jacobians.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::linalg::errors::{LinAlgError, LinAlgResult};

/// Largest matrix dimension the eigenvalue iteration accepts.
pub const MAX_DIM: usize = 4;

/// QrOptions — convergence controls for the eigenvalue iteration.
///
/// Fields
/// ------
/// - `tol`: `f64`
///   Relative off-diagonal threshold below which a subdiagonal entry is
///   treated as zero. Scaled internally by the matrix magnitude.
/// - `max_sweeps`: `usize`
///   Safety cap on QR sweeps; exceeding it yields
///   [`LinAlgError::NonConvergence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrOptions {
    pub tol: f64,
    pub max_sweeps: usize,
}

impl Default for QrOptions {
    fn default() -> Self {
        QrOptions { tol: 1e-10, max_sweeps: 200 }
    }
}

/// Decompose a square matrix as A = QR by classical Gram–Schmidt.
///
/// Parameters
/// ----------
/// - `a`: `&Array2<f64>`
///   Square matrix (n x n) with finite entries.
///
/// Returns
/// -------
/// `LinAlgResult<(Array2<f64>, Array2<f64>)>`
///   The pair (Q, R) with Q orthonormal columns and R upper triangular,
///   satisfying A = QR.
///
/// Errors
/// ------
/// - `LinAlgError::NotSquare`
///   When `a` is not square.
/// - `LinAlgError::NonFinite`
///   When any entry of `a` is NaN or infinite.
///
/// Notes
/// -----
/// - When a column is (numerically) linearly dependent on its predecessors,
///   its diagonal R entry is set to zero and the corresponding Q column is
///   completed from the standard basis, re-orthogonalized, so that Q stays
///   orthonormal even for singular A. The product QR still reproduces A
///   because the dependent column's coefficient is zero.
pub fn qr_decompose(a: &Array2<f64>) -> LinAlgResult<(Array2<f64>, Array2<f64>)> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinAlgError::NotSquare { rows: n, cols: a.ncols() });
    }
    for &v in a.iter() {
        if !v.is_finite() {
            return Err(LinAlgError::NonFinite { value: v });
        }
    }

    let mut q = Array2::<f64>::zeros((n, n));
    let mut r = Array2::<f64>::zeros((n, n));
    let rank_eps = 1e-12 * (1.0 + max_abs(a));

    for j in 0..n {
        let mut v: Array1<f64> = a.column(j).to_owned();
        for i in 0..j {
            let proj = q.column(i).dot(&a.column(j));
            r[[i, j]] = proj;
            let qi = q.column(i).to_owned();
            v.scaled_add(-proj, &qi);
        }
        let norm = v.dot(&v).sqrt();
        if norm > rank_eps {
            r[[j, j]] = norm;
            v.mapv_inplace(|x| x / norm);
        } else {
            // Dependent column: leave R's diagonal at zero and complete the
            // orthonormal basis from standard basis vectors.
            r[[j, j]] = 0.0;
            v = complete_basis_column(&q, j, n);
        }
        for row in 0..n {
            q[[row, j]] = v[row];
        }
    }
    Ok((q, r))
}

/// Eigenvalues of a square matrix (dimension 1..=4) by QR iteration.
///
/// Parameters
/// ----------
/// - `a`: `&Array2<f64>`
///   Square matrix with finite entries and dimension at most [`MAX_DIM`].
/// - `opts`: `&QrOptions`
///   Convergence threshold and sweep cap.
///
/// Returns
/// -------
/// `LinAlgResult<Vec<Complex64>>`
///   All n eigenvalues, real ones with zero imaginary part, complex ones in
///   conjugate pairs (non-negative imaginary member first).
///
/// Errors
/// ------
/// - `LinAlgError::NotSquare` / `LinAlgError::NonFinite`
///   Propagated from input validation.
/// - `LinAlgError::DimensionMismatch`
///   When the dimension exceeds [`MAX_DIM`].
/// - `LinAlgError::NonConvergence`
///   When the iterate is not quasi-triangular after `max_sweeps` sweeps.
///
/// Notes
/// -----
/// - Convergence requires every entry below the first subdiagonal to vanish
///   and no two *consecutive* subdiagonal entries to survive; surviving
///   isolated 2x2 blocks are resolved via trace and determinant.
/// - The iteration is unshifted. For the small, well-separated spectra this
///   crate produces (AR characteristic roots, damped Jacobians) the sweep
///   cap of 200 is far beyond what is needed in practice.
pub fn eigenvalues(a: &Array2<f64>, opts: &QrOptions) -> LinAlgResult<Vec<Complex64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(LinAlgError::NotSquare { rows: n, cols: a.ncols() });
    }
    if n > MAX_DIM {
        return Err(LinAlgError::DimensionMismatch { expected: MAX_DIM, found: n });
    }
    for &v in a.iter() {
        if !v.is_finite() {
            return Err(LinAlgError::NonFinite { value: v });
        }
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    if n == 1 {
        return Ok(vec![Complex64::new(a[[0, 0]], 0.0)]);
    }

    let thresh = opts.tol * (1.0 + max_abs(a));
    let mut m = a.clone();
    let mut converged = false;
    let mut sweeps = 0;

    while sweeps < opts.max_sweeps {
        if is_quasi_triangular(&m, thresh) {
            converged = true;
            break;
        }
        let (q, r) = qr_decompose(&m)?;
        m = r.dot(&q);
        sweeps += 1;
    }
    if !converged && !is_quasi_triangular(&m, thresh) {
        return Err(LinAlgError::NonConvergence {
            sweeps: opts.max_sweeps,
            off_diag: max_subdiagonal(&m),
        });
    }

    Ok(read_quasi_triangular(&m, thresh))
}

// Largest absolute entry; used to scale tolerances.
fn max_abs(a: &Array2<f64>) -> f64 {
    a.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()))
}

// Largest absolute entry strictly below the diagonal.
fn max_subdiagonal(m: &Array2<f64>) -> f64 {
    let n = m.nrows();
    let mut out = 0.0_f64;
    for row in 1..n {
        for col in 0..row {
            out = out.max(m[[row, col]].abs());
        }
    }
    out
}

// A matrix is quasi-triangular when everything below the first subdiagonal
// has vanished and no two consecutive subdiagonal entries survive (each
// surviving entry marks an isolated 2x2 block).
fn is_quasi_triangular(m: &Array2<f64>, thresh: f64) -> bool {
    let n = m.nrows();
    for row in 2..n {
        for col in 0..(row - 1) {
            if m[[row, col]].abs() > thresh {
                return false;
            }
        }
    }
    for i in 0..n.saturating_sub(2) {
        if m[[i + 1, i]].abs() > thresh && m[[i + 2, i + 1]].abs() > thresh {
            return false;
        }
    }
    true
}

// Scan the diagonal of a quasi-triangular iterate: isolated entries are real
// eigenvalues, surviving 2x2 blocks resolve via trace/determinant.
fn read_quasi_triangular(m: &Array2<f64>, thresh: f64) -> Vec<Complex64> {
    let n = m.nrows();
    let mut eigs = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        if i + 1 < n && m[[i + 1, i]].abs() > thresh {
            let (lo, hi) = block_eigenvalues(m[[i, i]], m[[i, i + 1]], m[[i + 1, i]], m[[i + 1, i + 1]]);
            eigs.push(lo);
            eigs.push(hi);
            i += 2;
        } else {
            eigs.push(Complex64::new(m[[i, i]], 0.0));
            i += 1;
        }
    }
    eigs
}

// Eigenvalues of a 2x2 block [[a, b], [c, d]] from trace and determinant.
// Complex pairs are returned non-negative imaginary part first.
fn block_eigenvalues(a: f64, b: f64, c: f64, d: f64) -> (Complex64, Complex64) {
    let trace = a + d;
    let det = a * d - b * c;
    let half = trace / 2.0;
    let disc = half * half - det;
    if disc >= 0.0 {
        let sq = disc.sqrt();
        (Complex64::new(half + sq, 0.0), Complex64::new(half - sq, 0.0))
    } else {
        let omega = (-disc).sqrt();
        (Complex64::new(half, omega), Complex64::new(half, -omega))
    }
}

// Complete the Q basis at column `j` with a standard basis vector
// orthogonalized against the existing columns.
fn complete_basis_column(q: &Array2<f64>, j: usize, n: usize) -> Array1<f64> {
    for k in 0..n {
        let mut v = Array1::<f64>::zeros(n);
        v[k] = 1.0;
        for i in 0..j {
            let proj = q.column(i).dot(&v);
            let qi = q.column(i).to_owned();
            v.scaled_add(-proj, &qi);
        }
        let norm = v.dot(&v).sqrt();
        if norm > 0.5 {
            v.mapv_inplace(|x| x / norm);
            return v;
        }
    }
    // Unreachable for j < n: at least one basis vector lies outside the span
    // of j < n orthonormal columns.
    Array1::<f64>::zeros(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - QR factorization correctness (orthogonality, reconstruction).
    // - Real and complex eigenvalue extraction on matrices with known
    //   spectra, including a singular matrix (zero eigenvalue).
    // - The 2x2 block trace/determinant resolution.
    //
    // They intentionally DO NOT cover:
    // - Characteristic-polynomial companion matrices; those paths are
    //   exercised in `roots::extract`.
    // -------------------------------------------------------------------------

    fn sorted_real_parts(eigs: &[Complex64]) -> Vec<f64> {
        let mut re: Vec<f64> = eigs.iter().map(|e| e.re).collect();
        re.sort_by(|x, y| x.partial_cmp(y).expect("finite"));
        re
    }

    #[test]
    // Purpose
    // -------
    // Verify Q is orthonormal and QR reconstructs A for a generic matrix.
    //
    // Given
    // -----
    // - A full-rank 3x3 matrix.
    //
    // Expect
    // ------
    // - QᵀQ = I and QR = A, both within 1e-10.
    fn qr_decompose_reconstructs_input() {
        // Arrange
        let a = arr2(&[[2.0, -1.0, 0.5], [1.0, 3.0, -2.0], [0.0, 1.0, 1.0]]);

        // Act
        let (q, r) = qr_decompose(&a).expect("full-rank matrix should factor");

        // Assert: orthogonality
        let qtq = q.t().dot(&q);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (qtq[[i, j]] - expected).abs() < 1e-10,
                    "QtQ[{i},{j}] = {} not {expected}",
                    qtq[[i, j]]
                );
            }
        }
        // Assert: reconstruction
        let qr = q.dot(&r);
        for i in 0..3 {
            for j in 0..3 {
                assert!((qr[[i, j]] - a[[i, j]]).abs() < 1e-10);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify real eigenvalues of an upper-triangular-like matrix are read
    // off correctly.
    //
    // Given
    // -----
    // - A symmetric matrix with eigenvalues {1, 3} ([[2,1],[1,2]]).
    //
    // Expect
    // ------
    // - Eigenvalues {1, 3} with zero imaginary part, within 1e-8.
    fn eigenvalues_recovers_symmetric_spectrum() {
        // Arrange
        let a = arr2(&[[2.0, 1.0], [1.0, 2.0]]);

        // Act
        let eigs = eigenvalues(&a, &QrOptions::default()).expect("should converge");

        // Assert
        let re = sorted_real_parts(&eigs);
        assert!((re[0] - 1.0).abs() < 1e-8, "smallest eigenvalue: {}", re[0]);
        assert!((re[1] - 3.0).abs() < 1e-8, "largest eigenvalue: {}", re[1]);
        assert!(eigs.iter().all(|e| e.im.abs() < 1e-8));
    }

    #[test]
    // Purpose
    // -------
    // Verify a rotation-like matrix resolves into the expected complex
    // conjugate pair via the 2x2 block formula.
    //
    // Given
    // -----
    // - A = [[0.5, -0.4], [0.4, 0.5]] with eigenvalues 0.5 ± 0.4i.
    //
    // Expect
    // ------
    // - A conjugate pair with real part 0.5 and |imag| 0.4.
    fn eigenvalues_resolves_complex_pair() {
        // Arrange
        let a = arr2(&[[0.5, -0.4], [0.4, 0.5]]);

        // Act
        let eigs = eigenvalues(&a, &QrOptions::default()).expect("block should resolve");

        // Assert
        assert_eq!(eigs.len(), 2);
        for e in &eigs {
            assert!((e.re - 0.5).abs() < 1e-10);
            assert!((e.im.abs() - 0.4).abs() < 1e-10);
        }
        assert!(eigs[0].im > 0.0, "non-negative imaginary member first");
    }

    #[test]
    // Purpose
    // -------
    // Ensure singular matrices (zero eigenvalue) iterate without error via
    // the orthonormal-completion fallback in the QR factorization.
    //
    // Given
    // -----
    // - A rank-1 matrix [[1, 1], [1, 1]] with eigenvalues {0, 2}.
    //
    // Expect
    // ------
    // - Eigenvalues {0, 2} within 1e-8.
    fn eigenvalues_handles_singular_matrix() {
        // Arrange
        let a = arr2(&[[1.0, 1.0], [1.0, 1.0]]);

        // Act
        let eigs = eigenvalues(&a, &QrOptions::default()).expect("singular matrix should iterate");

        // Assert
        let re = sorted_real_parts(&eigs);
        assert!(re[0].abs() < 1e-8, "zero eigenvalue: {}", re[0]);
        assert!((re[1] - 2.0).abs() < 1e-8, "nonzero eigenvalue: {}", re[1]);
    }

    #[test]
    // Purpose
    // -------
    // Verify a 4x4 matrix with known mixed spectrum (two real, one complex
    // pair) resolves fully.
    //
    // Given
    // -----
    // - Block-diagonal A with blocks [[0.5,-0.5],[0.5,0.5]] (0.5 ± 0.5i)
    //   and diag(0.9, -0.3).
    //
    // Expect
    // ------
    // - Two real eigenvalues 0.9 and -0.3 and a conjugate pair 0.5 ± 0.5i.
    fn eigenvalues_resolves_mixed_4x4_spectrum() {
        // Arrange
        let a = arr2(&[
            [0.5, -0.5, 0.0, 0.0],
            [0.5, 0.5, 0.0, 0.0],
            [0.0, 0.0, 0.9, 0.0],
            [0.0, 0.0, 0.0, -0.3],
        ]);

        // Act
        let eigs = eigenvalues(&a, &QrOptions::default()).expect("should converge");

        // Assert
        let mut reals: Vec<f64> =
            eigs.iter().filter(|e| e.im.abs() < 1e-8).map(|e| e.re).collect();
        reals.sort_by(|x, y| x.partial_cmp(y).expect("finite"));
        let complexes: Vec<&Complex64> = eigs.iter().filter(|e| e.im.abs() >= 1e-8).collect();

        assert_eq!(reals.len(), 2);
        assert_eq!(complexes.len(), 2);
        assert!((reals[0] + 0.3).abs() < 1e-8);
        assert!((reals[1] - 0.9).abs() < 1e-8);
        for e in complexes {
            assert!((e.re - 0.5).abs() < 1e-8);
            assert!((e.im.abs() - 0.5).abs() < 1e-8);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure oversized matrices are rejected up front.
    //
    // Given
    // -----
    // - A 5x5 zero matrix.
    //
    // Expect
    // ------
    // - `Err(LinAlgError::DimensionMismatch { .. })`.
    fn eigenvalues_rejects_oversized_matrix() {
        // Arrange
        let a = Array2::<f64>::zeros((5, 5));

        // Act
        let result = eigenvalues(&a, &QrOptions::default());

        // Assert
        assert!(matches!(result, Err(LinAlgError::DimensionMismatch { .. })));
    }
}
