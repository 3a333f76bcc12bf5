//! chronostab — stability analysis of sampled biological dynamics.
//!
//! Purpose
//! -------
//! Serve as the crate root for a numerical engine that quantifies the
//! dynamical stability of regularly sampled time series, built for gene
//! expression trajectories but agnostic to where the numbers come from.
//! The pipeline runs: fit a low-order autoregressive model, extract the
//! characteristic roots of its recurrence, classify the dominant root's
//! modulus into stability zones, and stress the conclusion with a
//! resampling and hypothesis-testing toolkit. A continuous/discrete
//! bridge cross-validates the fitted modulus against an ODE model of
//! the same system.
//!
//! Key behaviors
//! -------------
//! - Re-export the analysis subtrees (`ar`, `roots`, `stability`,
//!   `resampling`, `statistical_tests`, `bridge`, `linalg`) as the
//!   public crate surface, with the most common entry points lifted to
//!   the root.
//! - Keep every numerical kernel dependency-light: dense solves and the
//!   eigenvalue iteration live in `linalg` and cap at dimension 4, the
//!   largest supported autoregressive order.
//!
//! Invariants & assumptions
//! ------------------------
//! - Series are sampled at a fixed interval; irregular sampling must be
//!   regularized upstream.
//! - All public entry points validate their inputs and return rich
//!   error enums; `panic!` is reserved for violated internal
//!   invariants.
//! - Degenerate series (constant, or with collinear lag structure) are
//!   reported as missing results, never as fabricated stability calls.
//!
//! Conventions
//! -----------
//! - Autoregressive coefficients follow the recurrence
//!   `x_t = phi_1 x_{t-1} + ... + phi_p x_{t-p} + e_t` on the centered
//!   series; no intercept columns anywhere.
//! - Characteristic roots solve `lambda^p = phi_1 lambda^{p-1} + ... +
//!   phi_p`; a dominant modulus below 1 means perturbations decay.
//! - Seeded randomized routines reproduce bit-for-bit across runs and
//!   thread counts.
//!
//! Downstream usage
//! ----------------
//! - Typical flow: `ARFit::fit` (or `select_order` first), then
//!   `classify_fit` against a `ZoneTable`, then `ljung_box` on the
//!   residuals, with `bootstrap_ci` / `permutation_test` quantifying
//!   uncertainty and `bridge` checking against a mechanistic model.
//!
//! Testing notes
//! -------------
//! - Each subtree carries unit tests beside its code; `tests/` holds
//!   the end-to-end pipeline checks on synthetic series with known
//!   dynamics.

pub mod ar;
pub mod bridge;
pub mod linalg;
pub mod resampling;
pub mod roots;
pub mod stability;
pub mod statistical_tests;
pub mod utils;

pub use ar::{select_order, ARFit, AROptions, MAX_ORDER};
pub use bridge::{
    agreement, jacobian_eigenvalues, matrix_eigenvalues, predicted_discrete_modulus,
    simulate_sampled, BridgeConfig,
};
pub use resampling::{bootstrap_ci, cross_validate, permutation_test, ResamplePlan};
pub use roots::{dominant_root, extract_roots, Root};
pub use stability::{classify_fit, is_stable, is_stable_fit, ZoneTable};
pub use statistical_tests::{granger_test, ljung_box};
