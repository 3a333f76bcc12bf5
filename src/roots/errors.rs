//! roots::errors — error types for characteristic-root extraction.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the root extractor. Root
//! extraction fails only on malformed coefficient vectors or when the
//! degree-4 QR path fails to converge; both are surfaced here rather than
//! as NaN roots.
//!
//! Conventions
//! -----------
//! - Linear-algebra failures from the companion-matrix path are wrapped as
//!   [`RootError::LinAlg`] so callers can still match on the underlying
//!   [`LinAlgError`] (e.g. `NonConvergence`).

use crate::linalg::errors::LinAlgError;

pub type RootResult<T> = Result<T, RootError>;

/// RootError — failure modes of characteristic-root extraction.
///
/// Variants
/// --------
/// - `NoCoefficients`
///   The coefficient slice is empty; there is no polynomial to solve.
/// - `UnsupportedOrder(p)`
///   The coefficient slice has length above 4; closed forms and the QR
///   path only cover degrees 1 through 4.
/// - `NonFinite { index, value }`
///   A coefficient is NaN or infinite.
/// - `LinAlg(inner)`
///   The degree-4 companion-matrix eigenvalue iteration failed; see the
///   wrapped [`LinAlgError`] for the cause (typically `NonConvergence`).
#[derive(Debug, Clone, PartialEq)]
pub enum RootError {
    NoCoefficients,
    UnsupportedOrder(usize),
    NonFinite { index: usize, value: f64 },
    LinAlg(LinAlgError),
}

impl std::error::Error for RootError {}

impl std::fmt::Display for RootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootError::NoCoefficients => {
                write!(f, "Coefficient vector is empty; nothing to solve.")
            }
            RootError::UnsupportedOrder(p) => {
                write!(f, "Unsupported polynomial degree {p}; only degrees 1-4 are handled.")
            }
            RootError::NonFinite { index, value } => {
                write!(f, "Coefficient {index} is non-finite ({value}).")
            }
            RootError::LinAlg(inner) => write!(f, "Companion-matrix eigenvalue failure: {inner}"),
        }
    }
}

impl From<LinAlgError> for RootError {
    fn from(err: LinAlgError) -> Self {
        RootError::LinAlg(err)
    }
}
