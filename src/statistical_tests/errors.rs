//! statistical_tests::errors — error types for the diagnostic tests.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the Ljung–Box
//! residual-whiteness test and the Granger causality F-test. Every
//! refusal carries the offending quantity so callers can report exactly
//! why a diagnostic could not be run.

use crate::linalg::errors::LinAlgError;

pub type TestResult<T> = Result<T, TestError>;

/// TestError — failure modes of the diagnostic tests.
///
/// Variants
/// --------
/// - `LengthMismatch { left, right }`
///   Paired series disagree in length.
/// - `InsufficientData { needed, found }`
///   Too few observations for the requested lag structure.
/// - `InvalidLagCount { lags, fitted }`
///   Lag count is zero, does not exceed the number of fitted
///   parameters, or reaches the series length.
/// - `InvalidOrder(order)`
///   A causality test was requested at lag order zero.
/// - `ZeroVariance`
///   A series is constant, so no autocorrelation is defined.
/// - `InvalidData(value)`
///   A NaN or infinite observation.
/// - `LinAlg(inner)`
///   A regression inside the Granger test failed, typically collinear
///   lag columns.
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    LengthMismatch { left: usize, right: usize },
    InsufficientData { needed: usize, found: usize },
    InvalidLagCount { lags: usize, fitted: usize },
    InvalidOrder(usize),
    ZeroVariance,
    InvalidData(f64),
    LinAlg(LinAlgError),
}

impl std::error::Error for TestError {}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::LengthMismatch { left, right } => {
                write!(f, "Series lengths differ: {left} vs {right}.")
            }
            TestError::InsufficientData { needed, found } => {
                write!(f, "Insufficient data: need at least {needed} observations, found {found}.")
            }
            TestError::InvalidLagCount { lags, fitted } => {
                write!(
                    f,
                    "Invalid lag count {lags}: must exceed the {fitted} fitted parameters and \
                     stay below the series length."
                )
            }
            TestError::InvalidOrder(order) => {
                write!(f, "Invalid lag order {order}: must be at least 1.")
            }
            TestError::ZeroVariance => {
                write!(f, "Series has zero variance; autocorrelations are undefined.")
            }
            TestError::InvalidData(value) => {
                write!(f, "Invalid observation: {value}. Must be a finite number.")
            }
            TestError::LinAlg(inner) => write!(f, "Test regression failed: {inner}"),
        }
    }
}

impl From<LinAlgError> for TestError {
    fn from(err: LinAlgError) -> Self {
        TestError::LinAlg(err)
    }
}
