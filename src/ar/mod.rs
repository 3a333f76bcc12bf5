//! ar — autoregressive estimation for gene-expression time-series.
//!
//! Purpose
//! -------
//! The empirical arm of the persistence pipeline: fit AR(p) models
//! (p = 1..3) to centered series by least squares over lagged design
//! matrices, with optional ridge regularization, and score candidate
//! orders by AIC/BIC. Fitted coefficients feed the `roots` extractor; the
//! dominant-root modulus is the scalar every downstream comparison
//! consumes.
//!
//! Key behaviors
//! -------------
//! - [`ARFit::fit`] solves the normal equations through `linalg::solve`
//!   and returns an immutable fit (coefficients, residuals, R²).
//! - Degenerate input (constant series, singular design) produces a
//!   flagged zero-coefficient model, never an error and never NaN.
//! - [`select_order`] reports both AIC and BIC minimizers plus the full
//!   criterion table; the criteria may disagree.
//!
//! Downstream usage
//! ----------------
//! - `stability::classify_fit` consumes fits and honors the degenerate
//!   flag as missing data.
//! - `statistical_tests::ljung_box` diagnoses fit residuals;
//!   `bridge` compares an AR(2) fit of a sampled trajectory against the
//!   ODE-derived modulus.

pub mod errors;
pub mod fit;
pub mod selection;
pub mod validation;

pub use errors::{ARError, ARResult};
pub use fit::{ARFit, AROptions, MAX_ORDER};
pub use selection::{select_order, OrderCriteria, OrderSelection};
pub use validation::validate_series;
