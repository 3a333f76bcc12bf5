//! ar::errors — error types for autoregressive estimation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for AR(p) fitting and
//! model-order selection. Validation failures (short series, non-finite
//! values, bad order or ridge) are distinguished from numerical failures
//! propagated out of the linear solver, and both are distinguished from
//! *degenerate* input — which is not an error at all: a zero-variance or
//! collinear series produces a flagged zero-coefficient model, not an
//! `Err` (see `ar::fit`).
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of the domain constraint that
//!   failed ("length >= 2p + 1", "ridge must be non-negative"), not in
//!   terms of matrix internals.
//! - [`ARError::DegenerateSeries`] appears only where a *derived* quantity
//!   (a Gaussian likelihood for order selection) cannot be formed; plain
//!   fitting never returns it.

use crate::linalg::errors::LinAlgError;

pub type ARResult<T> = Result<T, ARError>;

/// ARError — failure modes of AR estimation and order selection.
///
/// Variants
/// --------
/// - `InsufficientData { needed, found }`
///   The series is shorter than 2p + 1 for the requested order p.
/// - `InvalidData(value)`
///   A series element is NaN or infinite.
/// - `InvalidOrder(order)`
///   The requested order is 0 or exceeds [`MAX_ORDER`](crate::ar::MAX_ORDER).
/// - `InvalidRidge(ridge)`
///   The ridge penalty is negative or non-finite.
/// - `DegenerateSeries`
///   Order selection was asked to score a series whose fits are degenerate
///   (zero variance or an exact fit), so no Gaussian likelihood exists.
/// - `LinAlg(inner)`
///   A linear-algebra failure other than singularity (singularity is
///   absorbed into the degenerate-model path during fitting).
#[derive(Debug, Clone, PartialEq)]
pub enum ARError {
    // ---- Input validation ----
    InsufficientData { needed: usize, found: usize },
    InvalidData(f64),
    InvalidOrder(usize),
    InvalidRidge(f64),

    // ---- Derived-quantity failures ----
    DegenerateSeries,
    LinAlg(LinAlgError),
}

impl std::error::Error for ARError {}

impl std::fmt::Display for ARError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ARError::InsufficientData { needed, found } => {
                write!(
                    f,
                    "Series too short: need at least {needed} observations (2p + 1), got {found}."
                )
            }
            ARError::InvalidData(value) => {
                write!(f, "Invalid series value: {value}. Must be a finite number.")
            }
            ARError::InvalidOrder(order) => {
                write!(f, "Invalid AR order: {order}. Must satisfy 1 <= p <= 3.")
            }
            ARError::InvalidRidge(ridge) => {
                write!(f, "Invalid ridge penalty: {ridge}. Must be finite and non-negative.")
            }
            ARError::DegenerateSeries => {
                write!(
                    f,
                    "Series yields only degenerate fits; no likelihood-based \
                     order selection is possible."
                )
            }
            ARError::LinAlg(inner) => write!(f, "Linear-algebra failure: {inner}"),
        }
    }
}

impl From<LinAlgError> for ARError {
    fn from(err: LinAlgError) -> Self {
        ARError::LinAlg(err)
    }
}
