//! resampling — randomized inference for fitted series summaries.
//!
//! Purpose
//! -------
//! House the distribution-free half of the robustness toolkit: the
//! permutation test for group differences, the percentile bootstrap for
//! interval estimates, and k-fold cross-validation for out-of-sample
//! checks. All three share a `ResamplePlan` and, when seeded, reproduce
//! exactly regardless of thread count.
//!
//! Submodules
//! ----------
//! - `plan`: shared iteration / seeding configuration.
//! - `permutation`: two-sided permutation test on a mean difference.
//! - `bootstrap`: percentile interval, IID or moving-block.
//! - `cross_validation`: k-fold OLS validation with an overfit flag.
//! - `errors`: `ResampleError` and `ResampleResult`.

pub mod bootstrap;
pub mod cross_validation;
pub mod errors;
pub mod permutation;
pub mod plan;

pub use bootstrap::{bootstrap_ci, BootstrapCI};
pub use cross_validation::{cross_validate, CVOutcome, OVERFIT_MARGIN};
pub use errors::{ResampleError, ResampleResult};
pub use permutation::{permutation_test, PermutationOutcome};
pub use plan::ResamplePlan;
