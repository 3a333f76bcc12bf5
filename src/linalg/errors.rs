//! linalg::errors — error types for the dense linear-algebra kernels.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the Gaussian-elimination
//! solver and the QR eigenvalue iteration. Every higher-level routine in the
//! crate (AR estimation, Granger regressions, Jacobian spectra) funnels its
//! linear-algebra failures through [`LinAlgError`], so singularity and
//! non-convergence are reported once, in one vocabulary.
//!
//! Key behaviors
//! -------------
//! - Define [`LinAlgResult`] and [`LinAlgError`] as the canonical result and
//!   error types for `linalg::solve` and `linalg::qr`.
//! - Attach human-readable `Display` messages phrased in terms of the domain
//!   constraint that failed (pivot tolerance, squareness, convergence cap).
//! - Carry just enough payload (column index, offending value, sweep count)
//!   for callers to log or branch on without holding the whole matrix.
//!
//! Conventions
//! -----------
//! - Singularity is detected against the fixed pivot tolerance
//!   `solve::PIVOT_EPS`; the error reports the elimination column at which no
//!   admissible pivot remained.
//! - Non-convergence of the QR iteration is a first-class error, never a
//!   silently returned unconverged spectrum.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload so diagnostics are meaningful without additional context.

pub type LinAlgResult<T> = Result<T, LinAlgError>;

/// LinAlgError — failure modes of the dense solver and QR iteration.
///
/// Variants
/// --------
/// - `NotSquare { rows, cols }`
///   The coefficient matrix is not square; elimination and eigenvalue
///   extraction are only defined for square systems here.
/// - `DimensionMismatch { expected, found }`
///   The right-hand-side vector length does not match the matrix dimension.
/// - `NonFinite { value }`
///   A matrix or vector entry (input or intermediate) is NaN or infinite.
/// - `Singular { column }`
///   After partial pivoting, no pivot in `column` exceeded the fixed
///   tolerance; the system has no reliable solution.
/// - `NonConvergence { sweeps, off_diag }`
///   The QR iteration failed to reach quasi-triangular form within the
///   sweep cap; `off_diag` is the residual subdiagonal magnitude.
#[derive(Debug, Clone, PartialEq)]
pub enum LinAlgError {
    // ---- Shape validation ----
    NotSquare { rows: usize, cols: usize },
    DimensionMismatch { expected: usize, found: usize },

    // ---- Numerical failures ----
    NonFinite { value: f64 },
    Singular { column: usize },
    NonConvergence { sweeps: usize, off_diag: f64 },
}

impl std::error::Error for LinAlgError {}

impl std::fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinAlgError::NotSquare { rows, cols } => {
                write!(f, "Coefficient matrix must be square; got {rows}x{cols}.")
            }
            LinAlgError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Right-hand side length {found} does not match matrix dimension {expected}."
                )
            }
            LinAlgError::NonFinite { value } => {
                write!(f, "Non-finite entry {value} encountered; inputs must be finite.")
            }
            LinAlgError::Singular { column } => {
                write!(
                    f,
                    "Matrix is singular within pivot tolerance at elimination column {column}."
                )
            }
            LinAlgError::NonConvergence { sweeps, off_diag } => {
                write!(
                    f,
                    "QR iteration did not converge after {sweeps} sweeps \
                     (residual off-diagonal magnitude {off_diag:e})."
                )
            }
        }
    }
}
