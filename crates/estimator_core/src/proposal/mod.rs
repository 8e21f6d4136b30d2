//! Proposal distributions for importance sampling.
//!
//! A proposal is a density g(x) paired with a generator that draws variates
//! distributed according to g. The importance-sampling estimator corrects each
//! draw by the likelihood ratio h(x)/g(x), so the closer g tracks the shape of
//! the integrand h, the lower the variance of the estimate.
//!
//! # Architecture
//!
//! ```text
//! Proposal (trait: density + draw)
//! ├── UnitUniform       (g = 1 on [0,1); the identity proposal)
//! ├── PowerRamp         (g = β(1−x)^{β−1}; closed-form inverse transform)
//! ├── InverseTransform  (caller-supplied density and inverse CDF)
//! ├── Exponential       (g = λe^{−λx} on [0,∞) via rand_distr)
//! └── ClosureProposal   (caller-supplied density and generator)
//! ```
//!
//! # Support coverage
//!
//! Importance sampling is unbiased only when g(x) > 0 wherever h(x) ≠ 0.
//! Stock proposals document their support; the estimator does not validate
//! coverage, and a zero density at a sampled point poisons the estimate with
//! an infinite or NaN term.
//!
//! # Examples
//!
//! ```rust
//! use estimator_core::proposal::{PowerRamp, Proposal};
//! use estimator_core::rng::EstimatorRng;
//!
//! let mut proposal = PowerRamp::square_root(EstimatorRng::from_seed(42));
//!
//! let x = proposal.draw();
//! assert!(x >= 0.0 && x < 1.0);
//! assert!(proposal.density(x) > 0.0);
//! ```

mod closure;
mod exponential;
mod inverse_transform;
mod power_ramp;
mod uniform;

pub use closure::ClosureProposal;
pub use exponential::Exponential;
pub use inverse_transform::InverseTransform;
pub use power_ramp::PowerRamp;
pub use uniform::UnitUniform;

/// Trait for proposal distributions used by importance sampling.
///
/// A proposal combines a probability density with a stateful generator drawing
/// from that density. The two halves must describe the same distribution; the
/// estimator trusts the pair and applies no empirical check.
///
/// # Design Philosophy
///
/// The generator takes `&mut self` because drawing advances an embedded random
/// engine. The density takes `&self` and must be pure. Implementations own
/// their engine ([`EstimatorRng`](crate::rng::EstimatorRng) or a caller
/// closure's captured state), so proposals used in the same run never share
/// engine state.
pub trait Proposal {
    /// Evaluates the proposal density at the given point.
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluation point
    ///
    /// # Returns
    /// The density g(x), zero outside the support.
    ///
    /// # Invariants
    /// - Pure: no side effects, deterministic
    /// - Non-negative everywhere; strictly positive on the support
    fn density(&self, x: f64) -> f64;

    /// Draws one variate distributed according to the proposal density.
    ///
    /// Successive calls are independent draws; each call advances the
    /// embedded engine.
    fn draw(&mut self) -> f64;
}
