//! resampling::errors — error types for randomized inference routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the permutation test,
//! bootstrap confidence interval, and k-fold cross-validation. The guards
//! here enforce the policy that a too-small group or a malformed plan
//! yields a structured refusal with an explicit reason — never a spurious
//! interval or p-value.

use crate::linalg::errors::LinAlgError;

pub type ResampleResult<T> = Result<T, ResampleError>;

/// ResampleError — failure modes of the resampling toolkit.
///
/// Variants
/// --------
/// - `GroupTooSmall { group, len, min }`
///   A sample group has fewer than `min` observations; no resampling
///   distribution can be formed.
/// - `InvalidData(value)`
///   A sample value is NaN or infinite.
/// - `InvalidIterations(n)`
///   The plan's iteration budget is zero.
/// - `InvalidAlpha(alpha)`
///   The CI tail mass is outside (0, 1).
/// - `InvalidBlockLength { block, len }`
///   The block-bootstrap block length is zero or exceeds the sample
///   length.
/// - `InvalidFoldCount { k, n }`
///   Cross-validation fold count outside 2..=n.
/// - `LengthMismatch { rows, targets }`
///   Design-matrix row count and target length disagree.
/// - `LinAlg(inner)`
///   A fold's normal equations were singular or otherwise unsolvable.
#[derive(Debug, Clone, PartialEq)]
pub enum ResampleError {
    // ---- Group / sample validation ----
    GroupTooSmall { group: &'static str, len: usize, min: usize },
    InvalidData(f64),

    // ---- Plan validation ----
    InvalidIterations(usize),
    InvalidAlpha(f64),
    InvalidBlockLength { block: usize, len: usize },

    // ---- Cross-validation ----
    InvalidFoldCount { k: usize, n: usize },
    LengthMismatch { rows: usize, targets: usize },
    LinAlg(LinAlgError),
}

impl std::error::Error for ResampleError {}

impl std::fmt::Display for ResampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleError::GroupTooSmall { group, len, min } => {
                write!(f, "Group '{group}' has {len} observations; need at least {min}.")
            }
            ResampleError::InvalidData(value) => {
                write!(f, "Invalid sample value: {value}. Must be a finite number.")
            }
            ResampleError::InvalidIterations(n) => {
                write!(f, "Iteration budget {n} is invalid; need at least 1.")
            }
            ResampleError::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha {alpha}; must lie strictly between 0 and 1.")
            }
            ResampleError::InvalidBlockLength { block, len } => {
                write!(f, "Invalid block length {block} for a sample of length {len}.")
            }
            ResampleError::InvalidFoldCount { k, n } => {
                write!(f, "Invalid fold count {k} for {n} samples; need 2 <= k <= n.")
            }
            ResampleError::LengthMismatch { rows, targets } => {
                write!(f, "Design matrix has {rows} rows but {targets} targets.")
            }
            ResampleError::LinAlg(inner) => write!(f, "Fold regression failed: {inner}"),
        }
    }
}

impl From<LinAlgError> for ResampleError {
    fn from(err: LinAlgError) -> Self {
        ResampleError::LinAlg(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover `Display` payload embedding; the conditions that
    // produce each variant are exercised by the routine-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify `GroupTooSmall` names the group and embeds both lengths.
    //
    // Given
    // -----
    // - Group "b" with 1 observation, minimum 2.
    //
    // Expect
    // ------
    // - The message contains "b", "1", and "2".
    fn group_too_small_display_names_group() {
        // Arrange
        let err = ResampleError::GroupTooSmall { group: "b", len: 1, min: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("'b'") && msg.contains('1') && msg.contains('2'), "Got: {msg}");
    }
}
