//! roots::extract — characteristic roots of AR(p) coefficient vectors.
//!
//! Purpose
//! -------
//! Compute the roots of the autoregressive characteristic polynomial
//! λᵖ − φ₁λᵖ⁻¹ − … − φₚ = 0 for p in 1..=4, with a dedicated closed form
//! per degree: linear (trivial), quadratic (discriminant), cubic
//! (Cardano with trigonometric and repeated-root branches), and quartic
//! (companion matrix + QR iteration with 2x2 block deflation).
//!
//! Key behaviors
//! -------------
//! - Always return exactly p roots with precomputed moduli; conjugate
//!   pairs list the non-negative-imaginary member first.
//! - For the quadratic complex branch, take the pair's modulus as
//!   √(−φ₂) via the product-of-roots identity, avoiding a second square
//!   root and its rounding.
//! - Branch the cubic on the sign of the depressed discriminant
//!   q²/4 + a³/27: one-real-two-complex, three-distinct-real
//!   (trigonometric form), or repeated roots.
//! - Delegate degree 4 to `linalg::qr::eigenvalues` on the companion
//!   matrix; QR non-convergence surfaces as a structured error, never as
//!   an unconverged root set.
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficients are the AR orientation (sign convention above), exactly
//!   as produced by `ar::fit`; callers passing monic-polynomial
//!   coefficients must negate them first.
//! - All coefficients are finite; validation rejects NaN/±∞ up front.
//!
//! Downstream usage
//! ----------------
//! - `ar::ARFit::roots` feeds fitted coefficients through
//!   [`extract_roots`]; `stability` and group comparisons consume the
//!   dominant modulus.
//! - `bridge::spectrum` reuses the quadratic/cubic paths for 2x2 and 3x3
//!   Jacobian characteristic polynomials.
//!
//! Testing notes
//! -------------
//! - Unit tests pin closed-form reference cases, (1.0, −0.5) ⇒ √0.5,
//!   (0.9, 0) ⇒ 0.9, (1.2, −0.36) ⇒ 0.6, plus cubic and quartic
//!   polynomials assembled from known root sets.

use ndarray::Array2;

use crate::linalg::qr::{eigenvalues, QrOptions};
use crate::roots::errors::{RootError, RootResult};
use crate::roots::types::Root;

// Branch tolerance for the cubic discriminant, scaled by coefficient size.
const CUBIC_BRANCH_EPS: f64 = 1e-12;

/// Roots of λᵖ − φ₁λᵖ⁻¹ − … − φₚ = 0 for AR coefficients (φ₁, …, φₚ).
///
/// Parameters
/// ----------
/// - `phi`: `&[f64]`
///   AR coefficient vector of length p, 1 ≤ p ≤ 4, finite entries. The
///   sign convention follows the AR recurrence
///   xₜ = φ₁xₜ₋₁ + … + φₚxₜ₋ₚ + εₜ.
///
/// Returns
/// -------
/// `RootResult<Vec<Root>>`
///   Exactly p roots (real roots may repeat), each with its precomputed
///   modulus. Conjugate pairs are adjacent, non-negative imaginary part
///   first.
///
/// Errors
/// ------
/// - `RootError::NoCoefficients`
///   For an empty slice.
/// - `RootError::UnsupportedOrder(p)`
///   For p > 4.
/// - `RootError::NonFinite { .. }`
///   For NaN or infinite coefficients.
/// - `RootError::LinAlg(..)`
///   When the degree-4 QR iteration fails to converge.
///
/// Panics
/// ------
/// - Never panics; all invalid inputs surface as `RootError` values.
///
/// Notes
/// -----
/// - Dominance and tie-breaking live in
///   [`dominant_root`](crate::roots::types::dominant_root); this function
///   only produces the full root set.
pub fn extract_roots(phi: &[f64]) -> RootResult<Vec<Root>> {
    if phi.is_empty() {
        return Err(RootError::NoCoefficients);
    }
    if phi.len() > 4 {
        return Err(RootError::UnsupportedOrder(phi.len()));
    }
    for (index, &value) in phi.iter().enumerate() {
        if !value.is_finite() {
            return Err(RootError::NonFinite { index, value });
        }
    }

    match phi {
        [phi1] => Ok(vec![Root::new(*phi1, 0.0)]),
        [phi1, phi2] => Ok(quadratic_roots(*phi1, *phi2)),
        [phi1, phi2, phi3] => Ok(cubic_roots(*phi1, *phi2, *phi3)),
        [phi1, phi2, phi3, phi4] => quartic_roots(*phi1, *phi2, *phi3, *phi4),
        _ => unreachable!("length checked above"),
    }
}

/// Closed-form roots of λ² − φ₁λ − φ₂ = 0.
///
/// Discriminant φ₁² + 4φ₂ ≥ 0 gives two real roots; a negative
/// discriminant gives the conjugate pair φ₁/2 ± i·√(−disc)/2 whose common
/// modulus is √(−φ₂) by the product-of-roots identity (complex branch
/// implies φ₂ < 0, so the radicand is non-negative).
pub fn quadratic_roots(phi1: f64, phi2: f64) -> Vec<Root> {
    let disc = phi1 * phi1 + 4.0 * phi2;
    if disc >= 0.0 {
        let sq = disc.sqrt();
        vec![Root::new((phi1 + sq) / 2.0, 0.0), Root::new((phi1 - sq) / 2.0, 0.0)]
    } else {
        let re = phi1 / 2.0;
        let im = (-disc).sqrt() / 2.0;
        let modulus = (-phi2).sqrt();
        vec![Root::with_modulus(re, im, modulus), Root::with_modulus(re, -im, modulus)]
    }
}

/// Cardano's-method roots of λ³ − φ₁λ² − φ₂λ − φ₃ = 0.
///
/// The cubic is depressed with λ = t − b/3 (b = −φ₁) to t³ + at + q, then
/// branched on the discriminant Δ = q²/4 + a³/27:
/// Δ > 0 one real + conjugate pair, Δ < 0 three distinct reals
/// (trigonometric form), Δ ≈ 0 repeated roots.
pub fn cubic_roots(phi1: f64, phi2: f64, phi3: f64) -> Vec<Root> {
    let b = -phi1;
    let c = -phi2;
    let d = -phi3;

    let a = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let shift = -b / 3.0;

    let disc = q * q / 4.0 + a * a * a / 27.0;
    let scale = a.abs().max(q.abs()).max(1.0);
    let eps = CUBIC_BRANCH_EPS * scale * scale;

    if disc > eps {
        // One real root, one conjugate pair.
        let sq = disc.sqrt();
        let t1 = (-q / 2.0 + sq).cbrt() + (-q / 2.0 - sq).cbrt();
        let re = -t1 / 2.0 + shift;
        // Quadratic cofactor t² + t₁t + (t₁² + a); its discriminant is
        // −(3t₁² + 4a), negative on this branch.
        let im = (3.0 * t1 * t1 + 4.0 * a).max(0.0).sqrt() / 2.0;
        vec![Root::new(t1 + shift, 0.0), Root::new(re, im), Root::new(re, -im)]
    } else if disc < -eps {
        // Three distinct real roots (requires a < 0 on this branch).
        let m = 2.0 * (-a / 3.0).sqrt();
        let cos_arg = (3.0 * q / (2.0 * a) * (-3.0 / a).sqrt()).clamp(-1.0, 1.0);
        let theta = cos_arg.acos() / 3.0;
        (0..3)
            .map(|k| {
                let angle = theta - 2.0 * std::f64::consts::PI * k as f64 / 3.0;
                Root::new(m * angle.cos() + shift, 0.0)
            })
            .collect()
    } else if a.abs() <= eps {
        // Triple root at the depression point.
        vec![Root::new(shift, 0.0); 3]
    } else {
        // One simple root 3q/a and a double root −3q/(2a).
        let single = 3.0 * q / a + shift;
        let double = -3.0 * q / (2.0 * a) + shift;
        vec![Root::new(single, 0.0), Root::new(double, 0.0), Root::new(double, 0.0)]
    }
}

/// QR-iteration roots of λ⁴ − φ₁λ³ − φ₂λ² − φ₃λ − φ₄ = 0 via the
/// top-row companion matrix.
fn quartic_roots(phi1: f64, phi2: f64, phi3: f64, phi4: f64) -> RootResult<Vec<Root>> {
    let mut companion = Array2::<f64>::zeros((4, 4));
    companion[[0, 0]] = phi1;
    companion[[0, 1]] = phi2;
    companion[[0, 2]] = phi3;
    companion[[0, 3]] = phi4;
    companion[[1, 0]] = 1.0;
    companion[[2, 1]] = 1.0;
    companion[[3, 2]] = 1.0;

    let eigs = eigenvalues(&companion, &QrOptions::default())?;
    Ok(eigs.into_iter().map(|e| Root::new(e.re, e.im)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::types::dominant_root;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Quadratic reference cases, including the √(−φ₂)
    //   complex-pair identity and the repeated-root boundary.
    // - Cubic branches: three distinct reals, one-real-two-complex, and
    //   the repeated-root case, against polynomials built from known
    //   root sets.
    // - Quartic extraction through the companion matrix, mixed real and
    //   complex spectrum.
    // - Input validation (empty, oversized, non-finite coefficient).
    //
    // They intentionally DO NOT cover:
    // - Recovery of roots from *fitted* coefficients; the round-trip from
    //   synthetic series lives in the integration tests.
    // -------------------------------------------------------------------------

    fn sorted_reals(roots: &[Root]) -> Vec<f64> {
        let mut re: Vec<f64> = roots.iter().map(|r| r.value.re).collect();
        re.sort_by(|x, y| x.partial_cmp(y).expect("finite"));
        re
    }

    #[test]
    // Purpose
    // -------
    // Pin the three quadratic reference cases from the persistence
    // analysis: complex pair, real pair with a zero root, and a repeated
    // real root at the branch boundary.
    //
    // Given
    // -----
    // - (φ₁, φ₂) = (1.0, −0.5), (0.9, 0.0), (1.2, −0.36).
    //
    // Expect
    // ------
    // - Dominant moduli √0.5, 0.9, and 0.6 respectively, within 1e-12.
    fn quadratic_reference_cases_have_exact_moduli() {
        // Arrange
        let cases = [(1.0, -0.5, 0.5_f64.sqrt()), (0.9, 0.0, 0.9), (1.2, -0.36, 0.6)];

        for (phi1, phi2, expected) in cases {
            // Act
            let roots = extract_roots(&[phi1, phi2]).expect("valid coefficients");
            let dominant = dominant_root(&roots).expect("two roots");

            // Assert
            assert!(
                (dominant.modulus - expected).abs() < 1e-12,
                "({phi1}, {phi2}): expected modulus {expected}, got {}",
                dominant.modulus
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the complex quadratic branch uses the product-of-roots
    // identity: modulus² equals −φ₂ exactly.
    //
    // Given
    // -----
    // - (φ₁, φ₂) = (0.6, −0.7), discriminant 0.36 − 2.8 < 0.
    //
    // Expect
    // ------
    // - Both roots have modulus √0.7 and are conjugates, upper member
    //   first.
    fn quadratic_complex_pair_uses_product_identity() {
        // Arrange & Act
        let roots = extract_roots(&[0.6, -0.7]).expect("valid coefficients");

        // Assert
        assert_eq!(roots.len(), 2);
        let expected = 0.7_f64.sqrt();
        assert!((roots[0].modulus - expected).abs() < 1e-15);
        assert!((roots[1].modulus - expected).abs() < 1e-15);
        assert!(roots[0].value.im > 0.0 && roots[1].value.im < 0.0);
        assert_eq!(roots[0].value.re, roots[1].value.re);
    }

    #[test]
    // Purpose
    // -------
    // Verify the trigonometric cubic branch recovers three known distinct
    // real roots.
    //
    // Given
    // -----
    // - (λ−0.5)(λ−0.2)(λ+0.3) = λ³ − 0.4λ² − 0.19λ + 0.03, i.e.
    //   φ = (0.4, 0.19, −0.03).
    //
    // Expect
    // ------
    // - Roots {−0.3, 0.2, 0.5}, all real, within 1e-10.
    fn cubic_three_real_roots_recovered() {
        // Arrange & Act
        let roots = extract_roots(&[0.4, 0.19, -0.03]).expect("valid coefficients");

        // Assert
        assert_eq!(roots.len(), 3);
        assert!(roots.iter().all(Root::is_real));
        let re = sorted_reals(&roots);
        for (got, want) in re.iter().zip([-0.3, 0.2, 0.5]) {
            assert!((got - want).abs() < 1e-10, "expected {want}, got {got}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the one-real-two-complex cubic branch against a polynomial
    // assembled from a real root and a conjugate pair.
    //
    // Given
    // -----
    // - (λ−0.8)(λ² − 0.6λ + 0.25): real root 0.8, pair 0.3 ± 0.4i
    //   (modulus 0.5). Expanded: λ³ − 1.4λ² + 0.73λ − 0.2, i.e.
    //   φ = (1.4, −0.73, 0.2).
    //
    // Expect
    // ------
    // - One real root 0.8 and a conjugate pair with modulus 0.5; the
    //   dominant root is the real 0.8.
    fn cubic_one_real_two_complex_recovered() {
        // Arrange & Act
        let roots = extract_roots(&[1.4, -0.73, 0.2]).expect("valid coefficients");

        // Assert
        assert_eq!(roots.len(), 3);
        let reals: Vec<&Root> = roots.iter().filter(|r| r.is_real()).collect();
        let pair: Vec<&Root> = roots.iter().filter(|r| !r.is_real()).collect();
        assert_eq!(reals.len(), 1);
        assert_eq!(pair.len(), 2);
        assert!((reals[0].value.re - 0.8).abs() < 1e-10);
        for root in pair {
            assert!((root.value.re - 0.3).abs() < 1e-10);
            assert!((root.value.im.abs() - 0.4).abs() < 1e-10);
            assert!((root.modulus - 0.5).abs() < 1e-10);
        }
        let dominant = dominant_root(&roots).expect("three roots");
        assert!((dominant.modulus - 0.8).abs() < 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Verify the repeated-root cubic branch.
    //
    // Given
    // -----
    // - (λ−0.5)²(λ+0.4) = λ³ − 0.6λ² − 0.15λ + 0.1, i.e.
    //   φ = (0.6, 0.15, −0.1).
    //
    // Expect
    // ------
    // - Roots {−0.4, 0.5, 0.5} within 1e-7 (the repeated root is less
    //   conditioned than simple roots).
    fn cubic_repeated_root_recovered() {
        // Arrange & Act
        let roots = extract_roots(&[0.6, 0.15, -0.1]).expect("valid coefficients");

        // Assert
        assert_eq!(roots.len(), 3);
        let re = sorted_reals(&roots);
        assert!((re[0] + 0.4).abs() < 1e-7, "simple root: {}", re[0]);
        assert!((re[1] - 0.5).abs() < 1e-7, "double root: {}", re[1]);
        assert!((re[2] - 0.5).abs() < 1e-7, "double root: {}", re[2]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the quartic companion path on a known mixed spectrum.
    //
    // Given
    // -----
    // - (λ² − 0.9λ + 0.5)(λ − 0.3)(λ + 0.2)
    //   = λ⁴ − 1.0λ³ + 0.53λ² + 0.004λ − 0.03, i.e.
    //   φ = (1.0, −0.53, −0.004, 0.03). The quadratic factor carries a
    //   conjugate pair with modulus √0.5.
    //
    // Expect
    // ------
    // - Two real roots 0.3 and −0.2, a conjugate pair with modulus √0.5,
    //   and dominant modulus √0.5 ≈ 0.7071.
    fn quartic_mixed_spectrum_recovered() {
        // Arrange & Act
        let roots = extract_roots(&[1.0, -0.53, -0.004, 0.03]).expect("valid coefficients");

        // Assert
        assert_eq!(roots.len(), 4);
        let tol = 1e-7;
        let mut reals: Vec<f64> =
            roots.iter().filter(|r| r.value.im.abs() < tol).map(|r| r.value.re).collect();
        reals.sort_by(|x, y| x.partial_cmp(y).expect("finite"));
        let pair: Vec<&Root> = roots.iter().filter(|r| r.value.im.abs() >= tol).collect();

        assert_eq!(reals.len(), 2, "roots: {roots:?}");
        assert_eq!(pair.len(), 2, "roots: {roots:?}");
        assert!((reals[0] + 0.2).abs() < tol);
        assert!((reals[1] - 0.3).abs() < tol);
        for root in pair {
            assert!((root.modulus - 0.5_f64.sqrt()).abs() < tol);
        }
        let dominant = dominant_root(&roots).expect("four roots");
        assert!((dominant.modulus - 0.5_f64.sqrt()).abs() < tol);
    }

    #[test]
    // Purpose
    // -------
    // Verify coefficient validation fires before any computation.
    //
    // Given
    // -----
    // - An empty slice, a length-5 slice, and a NaN coefficient.
    //
    // Expect
    // ------
    // - The corresponding structured errors.
    fn extract_roots_validates_coefficients() {
        // Act & Assert
        assert!(matches!(extract_roots(&[]), Err(RootError::NoCoefficients)));
        assert!(matches!(
            extract_roots(&[0.1; 5]),
            Err(RootError::UnsupportedOrder(5))
        ));
        assert!(matches!(
            extract_roots(&[0.5, f64::NAN]),
            Err(RootError::NonFinite { index: 1, .. })
        ));
    }
}
