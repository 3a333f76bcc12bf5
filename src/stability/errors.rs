//! stability::errors — error types for stability classification.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for zone-table construction and
//! modulus classification. Table problems (empty, unordered, non-finite
//! bounds) are caught at construction, so classification itself can only
//! fail on an invalid modulus.

use crate::roots::errors::RootError;

pub type StabilityResult<T> = Result<T, StabilityError>;

/// StabilityError — failure modes of zone tables and classification.
///
/// Variants
/// --------
/// - `EmptyTable`
///   A zone table needs at least one band below the overflow label.
/// - `InvalidBound { index, value }`
///   A band's upper bound is non-finite or not strictly positive.
/// - `NonAscendingBounds { index }`
///   Band bounds must strictly increase; `index` is the first offender.
/// - `InvalidModulus(value)`
///   The modulus to classify is NaN, infinite, or negative.
/// - `Root(inner)`
///   Root extraction failed while classifying a fitted model.
#[derive(Debug, Clone, PartialEq)]
pub enum StabilityError {
    EmptyTable,
    InvalidBound { index: usize, value: f64 },
    NonAscendingBounds { index: usize },
    InvalidModulus(f64),
    Root(RootError),
}

impl std::error::Error for StabilityError {}

impl std::fmt::Display for StabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StabilityError::EmptyTable => {
                write!(f, "Zone table must contain at least one band.")
            }
            StabilityError::InvalidBound { index, value } => {
                write!(f, "Band {index} has invalid upper bound {value}; must be finite and > 0.")
            }
            StabilityError::NonAscendingBounds { index } => {
                write!(f, "Band bounds must strictly increase; violated at band {index}.")
            }
            StabilityError::InvalidModulus(value) => {
                write!(f, "Invalid modulus {value}; must be finite and non-negative.")
            }
            StabilityError::Root(inner) => write!(f, "Root extraction failed: {inner}"),
        }
    }
}

impl From<RootError> for StabilityError {
    fn from(err: RootError) -> Self {
        StabilityError::Root(err)
    }
}
