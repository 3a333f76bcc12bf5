//! stability — mapping dominant-root moduli to stability verdicts.
//!
//! Purpose
//! -------
//! Classify a dominant-root modulus into a named stability zone using a
//! caller-supplied threshold table, and answer the boolean "stable?"
//! predicate. Acceptable bands vary by biological context (a liver panel
//! and a hypothalamus panel draw their lines differently), so the table is
//! configuration passed in by the caller — the engine hard-codes nothing.
//!
//! Key behaviors
//! -------------
//! - [`ZoneTable`] is an ordered, exhaustive, mutually exclusive partition
//!   of [0, ∞): bands cover [0, b₁), [b₁, b₂), …, with a final overflow
//!   label for moduli at or above the last bound. Construction validates
//!   ordering once; classification is then a pure lookup.
//! - [`is_stable`] requires modulus < 1 and, when AR(2) coefficients are
//!   available, the classical stability-triangle conditions
//!   (1 − φ₂ > 0, 1 + φ₁ − φ₂ > 0, 1 − φ₁ − φ₂ > 0) — a guard against
//!   roots that squeak under 1 in modulus while the coefficients sit
//!   outside the admissible region due to estimation noise.
//! - [`classify_fit`] treats a degenerate fit as **missing data**: it
//!   returns `None` rather than a zone label, so a modulus-0 degenerate
//!   result can never masquerade as "perfectly stable" downstream.
//!
//! Invariants & assumptions
//! ------------------------
//! - No hidden global state: identical (modulus, table) inputs always
//!   produce identical labels.
//! - `is_stable(NaN, _)` is false; NaN never classifies as stable.

pub mod errors;

pub use errors::{StabilityError, StabilityResult};

use crate::ar::fit::ARFit;

/// ZoneBand — one band of a stability partition.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneBand {
    pub upper_bound: f64,
    pub label: String,
}

/// ZoneTable — validated, ordered partition of [0, ∞) into named bands.
///
/// Built once from `(upper_bound, label)` pairs plus an overflow label for
/// moduli at or above the last bound; classification is then a pure
/// function of the modulus.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTable {
    bands: Vec<ZoneBand>,
    overflow_label: String,
}

impl ZoneTable {
    /// Build a zone table from ascending `(upper_bound, label)` pairs.
    ///
    /// Parameters
    /// ----------
    /// - `bands`: `&[(f64, &str)]`
    ///   Non-empty, strictly ascending, strictly positive finite upper
    ///   bounds with their labels. Band i covers
    ///   [previous bound, bounds[i]).
    /// - `overflow_label`: `&str`
    ///   Label for moduli at or above the last bound, completing the
    ///   partition of [0, ∞).
    ///
    /// Errors
    /// ------
    /// - `StabilityError::EmptyTable` / `InvalidBound` /
    ///   `NonAscendingBounds` per the constraints above.
    pub fn new(bands: &[(f64, &str)], overflow_label: &str) -> StabilityResult<Self> {
        if bands.is_empty() {
            return Err(StabilityError::EmptyTable);
        }
        let mut prev = 0.0;
        for (index, &(bound, _)) in bands.iter().enumerate() {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(StabilityError::InvalidBound { index, value: bound });
            }
            if bound <= prev {
                return Err(StabilityError::NonAscendingBounds { index });
            }
            prev = bound;
        }
        Ok(ZoneTable {
            bands: bands
                .iter()
                .map(|&(upper_bound, label)| ZoneBand { upper_bound, label: label.to_string() })
                .collect(),
            overflow_label: overflow_label.to_string(),
        })
    }

    /// Classify a modulus into its zone label.
    ///
    /// Returns the label of the first band whose upper bound exceeds the
    /// modulus, or the overflow label. Errors on NaN, infinite, or
    /// negative moduli.
    pub fn classify(&self, modulus: f64) -> StabilityResult<&str> {
        if !modulus.is_finite() || modulus < 0.0 {
            return Err(StabilityError::InvalidModulus(modulus));
        }
        for band in &self.bands {
            if modulus < band.upper_bound {
                return Ok(&band.label);
            }
        }
        Ok(&self.overflow_label)
    }
}

/// Stability predicate on a dominant-root modulus.
///
/// Parameters
/// ----------
/// - `modulus`: `f64`
///   Dominant-root modulus. NaN is never stable.
/// - `ar2_coefficients`: `Option<(f64, f64)>`
///   (φ₁, φ₂) when the fit was AR(2); enables the stability-triangle
///   guard. `None` falls back to the modulus criterion alone.
///
/// Returns
/// -------
/// `bool`
///   True iff modulus < 1 and (when coefficients are supplied) all three
///   triangle conditions hold strictly. At the unit root φ₂ = −1 the
///   verdict flips to unstable: 1 − φ₂ = 2 > 0 but the modulus reaches 1.
pub fn is_stable(modulus: f64, ar2_coefficients: Option<(f64, f64)>) -> bool {
    if !(modulus < 1.0) {
        return false;
    }
    match ar2_coefficients {
        Some((phi1, phi2)) => {
            1.0 - phi2 > 0.0 && 1.0 + phi1 - phi2 > 0.0 && 1.0 - phi1 - phi2 > 0.0
        }
        None => true,
    }
}

/// Zone label for a fitted model, honoring the degenerate-fit contract.
///
/// A degenerate fit carries no information about persistence; its
/// modulus 0 is an artifact of the zero-coefficient fallback. This
/// returns `Ok(None)` for degenerate fits — missing data — and a zone
/// label only for genuine estimates.
pub fn classify_fit<'t>(fit: &ARFit, table: &'t ZoneTable) -> StabilityResult<Option<&'t str>> {
    if fit.degenerate {
        return Ok(None);
    }
    let modulus = fit.dominant_modulus()?;
    Ok(Some(table.classify(modulus)?))
}

/// Stability verdict for a fitted model; `None` for degenerate fits.
///
/// AR(2) fits additionally apply the stability-triangle guard using the
/// fitted coefficients.
pub fn is_stable_fit(fit: &ARFit) -> StabilityResult<Option<bool>> {
    if fit.degenerate {
        return Ok(None);
    }
    let modulus = fit.dominant_modulus()?;
    let coeffs = if fit.order == 2 {
        Some((fit.coefficients[0], fit.coefficients[1]))
    } else {
        None
    };
    Ok(Some(is_stable(modulus, coeffs)))
}
