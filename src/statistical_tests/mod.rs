//! statistical_tests — diagnostic hypothesis tests for fitted models.
//!
//! Purpose
//! -------
//! House the distribution-based half of the robustness toolkit: the
//! Ljung–Box portmanteau test for residual whiteness and the Granger
//! causality F-test for directional predictive coupling between series.
//!
//! Submodules
//! ----------
//! - `ljung_box`: residual-whiteness portmanteau test.
//! - `granger`: nested-regression causality F-test.
//! - `errors`: `TestError` and `TestResult`.

pub mod errors;
pub mod granger;
pub mod ljung_box;

pub use errors::{TestError, TestResult};
pub use granger::{granger_test, GrangerOutcome};
pub use ljung_box::{ljung_box, LjungBoxOutcome};
