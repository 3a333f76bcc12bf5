//! roots — characteristic-root extraction for autoregressive fits.
//!
//! Purpose
//! -------
//! Turn AR(p) coefficient vectors into the roots of the associated
//! characteristic polynomial λᵖ − φ₁λᵖ⁻¹ − … − φₚ = 0 and select the
//! dominant (maximum-modulus) root that drives all downstream persistence
//! comparisons. Degrees 1-3 use closed forms (discriminant, Cardano);
//! degree 4 goes through the companion matrix and `linalg`'s QR iteration.
//!
//! Key behaviors
//! -------------
//! - [`extract_roots`] always returns exactly p roots with precomputed
//!   moduli; complex-conjugate pairs are adjacent, upper member first.
//! - [`dominant_root`] breaks equal-modulus ties deterministically
//!   (non-negative imaginary part, then larger real part) so derived
//!   period/phase values are stable across runs.
//! - QR non-convergence on the quartic path is a structured error, never
//!   an unconverged root set.
//!
//! Downstream usage
//! ----------------
//! - `ar::ARFit::roots` and `ar::ARFit::dominant_modulus` wrap this
//!   module for callers holding a fitted model.
//! - `bridge::spectrum` reuses the quadratic/cubic closed forms on
//!   Jacobian characteristic polynomials.

pub mod errors;
pub mod extract;
pub mod types;

pub use errors::{RootError, RootResult};
pub use extract::{cubic_roots, extract_roots, quadratic_roots};
pub use types::{dominant_root, Root, TIE_EPS};
