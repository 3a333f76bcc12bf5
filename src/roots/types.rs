//! roots::types — the root value type and dominant-root selection.
//!
//! Purpose
//! -------
//! Define [`Root`], a characteristic root carried as a complex number with
//! its precomputed modulus, and the deterministic dominant-root selection
//! used by every downstream persistence comparison.
//!
//! Key behaviors
//! -------------
//! - Store the modulus alongside the complex value so the primary output
//!   consumed downstream is a plain scalar, computed exactly once.
//! - Break equal-modulus ties deterministically: prefer the root with
//!   non-negative imaginary part, then the larger real part. Conjugate
//!   pairs therefore always elect their upper-half-plane member, which
//!   keeps derived phase/period values stable across runs.
//! - Derive the oscillation period implied by a complex root,
//!   2π / |arg λ|, used by rhythm analysis downstream.
//!
//! Invariants & assumptions
//! ------------------------
//! - `modulus` always equals the complex magnitude of `value` up to the
//!   construction path's analytic identity (the quadratic complex pair is
//!   built with modulus √(−φ₂) from the product-of-roots identity).
//! - Real roots are constructed with an exactly zero imaginary part, so
//!   `is_real` is an exact test, not a tolerance test.

use num_complex::Complex64;

/// Modulus slack inside which two roots are considered tied and the
/// deterministic tie-break applies.
pub const TIE_EPS: f64 = 1e-12;

/// Root — a characteristic root with its precomputed modulus.
///
/// Fields
/// ------
/// - `value`: `Complex64`
///   The root itself; conjugate pairs appear as two entries.
/// - `modulus`: `f64`
///   |value|, precomputed at construction. This scalar is the primary
///   output consumed by stability classification and group comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub value: Complex64,
    pub modulus: f64,
}

impl Root {
    /// Construct a root from real and imaginary parts; the modulus is the
    /// complex magnitude.
    pub fn new(re: f64, im: f64) -> Self {
        let value = Complex64::new(re, im);
        Root { value, modulus: value.norm() }
    }

    /// Construct a root with an analytically known modulus (e.g. √(−φ₂)
    /// for a quadratic conjugate pair), avoiding a second square root.
    pub fn with_modulus(re: f64, im: f64, modulus: f64) -> Self {
        Root { value: Complex64::new(re, im), modulus }
    }

    /// True when the root was constructed with a zero imaginary part.
    pub fn is_real(&self) -> bool {
        self.value.im == 0.0
    }

    /// Oscillation period implied by a complex root at the fit's sampling
    /// interval: 2π / |arg λ| timepoints per cycle.
    ///
    /// Returns `None` for real non-negative roots (no oscillation). A real
    /// negative root has arg π and yields the alternating period 2.
    pub fn period(&self) -> Option<f64> {
        let arg = self.value.arg();
        if arg == 0.0 {
            return None;
        }
        Some(std::f64::consts::TAU / arg.abs())
    }
}

/// Select the dominant root: maximum modulus, ties broken deterministically.
///
/// Parameters
/// ----------
/// - `roots`: `&[Root]`
///   Candidate roots, typically all p roots of one fit.
///
/// Returns
/// -------
/// `Option<Root>`
///   The root of maximum modulus, or `None` for an empty slice. When two
///   moduli agree within [`TIE_EPS`], the root with non-negative imaginary
///   part wins; among roots on the same side of the real axis, the larger
///   real part wins.
///
/// Notes
/// -----
/// - The tie-break matters: downstream period/phase calculations depend on
///   which of a conjugate pair is reported, so the choice must not vary
///   with root ordering.
pub fn dominant_root(roots: &[Root]) -> Option<Root> {
    let mut best: Option<Root> = None;
    for &cand in roots {
        match best {
            None => best = Some(cand),
            Some(cur) => {
                if beats(&cand, &cur) {
                    best = Some(cand);
                }
            }
        }
    }
    best
}

// Deterministic ordering for dominant-root selection.
fn beats(cand: &Root, best: &Root) -> bool {
    if cand.modulus > best.modulus + TIE_EPS {
        return true;
    }
    if (cand.modulus - best.modulus).abs() > TIE_EPS {
        return false;
    }
    let cand_upper = cand.value.im >= 0.0;
    let best_upper = best.value.im >= 0.0;
    if cand_upper != best_upper {
        return cand_upper;
    }
    cand.value.re > best.value.re + TIE_EPS
}
