//! linalg — dense linear-algebra kernels shared across the crate.
//!
//! Purpose
//! -------
//! Provide the two numerical kernels every higher-level fit depends on: a
//! partial-pivoting Gaussian-elimination solver for normal equations, and a
//! Gram–Schmidt QR eigenvalue iteration for small (up to 4x4) matrices.
//! Both report failures through the shared [`LinAlgError`] type so callers
//! see one vocabulary for singularity and non-convergence.
//!
//! Key behaviors
//! -------------
//! - [`solve::solve`] resolves Ax = b with partial pivoting against the
//!   fixed tolerance [`solve::PIVOT_EPS`], signalling `Singular` instead of
//!   dividing by a vanishing pivot.
//! - [`qr::eigenvalues`] iterates to quasi-triangular form under an
//!   off-diagonal threshold with a sweep cap, resolving surviving 2x2
//!   blocks into complex-conjugate pairs.
//!
//! Downstream usage
//! ----------------
//! - `ar` solves (ridge-augmented) normal equations through this module.
//! - `roots` extracts degree-4 characteristic roots via companion-matrix
//!   eigenvalues.
//! - `bridge` computes Jacobian spectra for the continuous↔discrete
//!   eigenvalue comparison.

pub mod errors;
pub mod qr;
pub mod solve;

pub use errors::{LinAlgError, LinAlgResult};
pub use qr::{eigenvalues, qr_decompose, QrOptions};
pub use solve::{solve, PIVOT_EPS};
