//! ar::validation — shared input guards for autoregressive estimation.
//!
//! Purpose
//! -------
//! Centralize the preconditions every AR entry point shares: a supported
//! order, finite data, and the length invariant n >= 2p + 1. Checking these
//! once, before any computation, keeps NaNs and short series from being
//! discovered mid-solve.
//!
//! Conventions
//! -----------
//! - This module is purely about validation; it performs no arithmetic on
//!   the series beyond scanning for non-finite values.
//! - Callers treat `Ok(())` as a guarantee that the design matrix for an
//!   order-p fit can be built with at least p + 1 rows.

use crate::ar::errors::{ARError, ARResult};
use crate::ar::fit::MAX_ORDER;

/// Validate a series/order pair for an AR(p) fit.
///
/// Parameters
/// ----------
/// - `series`: `&[f64]`
///   Time-ordered observations; every value must be finite.
/// - `order`: `usize`
///   Requested AR order p; must satisfy 1 <= p <= [`MAX_ORDER`].
///
/// Returns
/// -------
/// `ARResult<()>`
///   `Ok(())` when the order is supported, the data are finite, and
///   `series.len() >= 2 * order + 1`.
///
/// Errors
/// ------
/// - `ARError::InvalidOrder`
///   When `order` is 0 or above [`MAX_ORDER`].
/// - `ARError::InvalidData`
///   When any element is NaN or infinite (first offender reported).
/// - `ARError::InsufficientData`
///   When the series is shorter than 2p + 1 (an empty series reports
///   `found: 0`).
pub fn validate_series(series: &[f64], order: usize) -> ARResult<()> {
    if order == 0 || order > MAX_ORDER {
        return Err(ARError::InvalidOrder(order));
    }
    for &value in series {
        if !value.is_finite() {
            return Err(ARError::InvalidData(value));
        }
    }
    let needed = 2 * order + 1;
    if series.len() < needed {
        return Err(ARError::InsufficientData { needed, found: series.len() });
    }
    Ok(())
}
