//! bridge::errors — error types for the continuous/discrete bridge.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for Jacobian estimation,
//! spectrum extraction, and the eigenvalue-to-modulus mapping that ties
//! a continuous-time model to its discretely sampled fit.

use crate::linalg::errors::LinAlgError;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// BridgeError — failure modes of the continuous/discrete bridge.
///
/// Variants
/// --------
/// - `DimensionMismatch { expected, found }`
///   A vector field's output length disagrees with its input length.
/// - `UnsupportedDimension(n)`
///   State dimension above the supported eigenvalue range.
/// - `NonFinite(value)`
///   A NaN or infinite entry in a state, matrix, or spectrum.
/// - `EmptySpectrum`
///   No eigenvalues to map through the bridge.
/// - `InvalidSampling { tau, calibration }`
///   Non-positive or non-finite sampling interval or calibration
///   factor.
/// - `InvalidSubsteps`
///   Zero integration substeps per sampling interval.
/// - `LinAlg(inner)`
///   Propagated numerical failure from the eigenvalue iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    DimensionMismatch { expected: usize, found: usize },
    UnsupportedDimension(usize),
    NonFinite(f64),
    EmptySpectrum,
    InvalidSampling { tau: f64, calibration: f64 },
    InvalidSubsteps,
    LinAlg(LinAlgError),
}

impl std::error::Error for BridgeError {}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::DimensionMismatch { expected, found } => {
                write!(f, "Vector field returned {found} components for a {expected}-dim state.")
            }
            BridgeError::UnsupportedDimension(n) => {
                write!(f, "State dimension {n} unsupported; eigenvalues cover 1 through 4.")
            }
            BridgeError::NonFinite(value) => {
                write!(f, "Non-finite value {value} encountered in the bridge.")
            }
            BridgeError::EmptySpectrum => {
                write!(f, "Cannot map an empty eigenvalue spectrum.")
            }
            BridgeError::InvalidSampling { tau, calibration } => {
                write!(
                    f,
                    "Invalid sampling configuration: tau = {tau}, calibration = {calibration}. \
                     Both must be positive and finite."
                )
            }
            BridgeError::InvalidSubsteps => {
                write!(f, "Need at least one integration substep per sampling interval.")
            }
            BridgeError::LinAlg(inner) => write!(f, "Eigenvalue computation failed: {inner}"),
        }
    }
}

impl From<LinAlgError> for BridgeError {
    fn from(err: LinAlgError) -> Self {
        BridgeError::LinAlg(err)
    }
}
