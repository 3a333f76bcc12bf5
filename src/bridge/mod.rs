//! bridge — continuous-time models meet discretely sampled fits.
//!
//! Purpose
//! -------
//! Connect an ODE description of a system to the autoregressive view of
//! its sampled trajectory: estimate the Jacobian, extract its eigenvalue
//! spectrum, map each eigenvalue through the sampling interval to a
//! predicted discrete root modulus, and score agreement with the
//! modulus a fit actually reports. A simulation helper generates the
//! sampled trajectories needed for end-to-end checks.
//!
//! Submodules
//! ----------
//! - `jacobian`: central-difference Jacobian estimation.
//! - `spectrum`: eigenvalues of 1-4 dimensional system matrices.
//! - `discrete`: `exp(Re(lambda) * tau)` mapping and agreement score.
//! - `simulate`: fixed-step RK4 trajectory sampling.
//! - `errors`: `BridgeError` and `BridgeResult`.

pub mod discrete;
pub mod errors;
pub mod jacobian;
pub mod simulate;
pub mod spectrum;

pub use discrete::{agreement, predicted_discrete_modulus, BridgeConfig};
pub use errors::{BridgeError, BridgeResult};
pub use jacobian::{jacobian, FD_EPSILON};
pub use simulate::simulate_sampled;
pub use spectrum::{jacobian_eigenvalues, matrix_eigenvalues};
