//! The identity proposal: uniform on the unit interval.

use crate::proposal::Proposal;
use crate::rng::EstimatorRng;

/// Uniform proposal on [0, 1) with density 1.
///
/// With this proposal every importance weight collapses to h(x)/1 = h(x), so
/// importance sampling reduces exactly to crude Monte Carlo. Draws come
/// straight from the owned engine without transformation, which makes the
/// reduction bit-identical under matched seeds, not merely statistical.
///
/// # Examples
///
/// ```rust
/// use estimator_core::proposal::{Proposal, UnitUniform};
/// use estimator_core::rng::EstimatorRng;
///
/// let mut proposal = UnitUniform::new(EstimatorRng::from_seed(42));
/// let x = proposal.draw();
/// assert!(x >= 0.0 && x < 1.0);
/// assert_eq!(proposal.density(x), 1.0);
/// ```
pub struct UnitUniform {
    rng: EstimatorRng,
}

impl UnitUniform {
    /// Creates a uniform proposal drawing from the given variate source.
    #[inline]
    pub fn new(rng: EstimatorRng) -> Self {
        Self { rng }
    }

    /// Returns the seed of the embedded variate source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Proposal for UnitUniform {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        if (0.0..1.0).contains(&x) {
            1.0
        } else {
            0.0
        }
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        self.rng.gen_uniform()
    }
}
