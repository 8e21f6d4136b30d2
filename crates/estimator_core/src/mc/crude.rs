//! Crude (uniform) Monte Carlo estimator.

use crate::error::EstimatorError;
use crate::integrand::Integrand;
use crate::mc::{Estimate, Integrator};
use crate::rng::EstimatorRng;

/// Crude Monte Carlo estimator over the unit interval.
///
/// Draws uniform variates uᵢ ~ [0, 1) from an internally owned engine and
/// estimates ∫₀¹ h(x) dx as the sample mean of h(uᵢ). Unbiased because
/// E[h(U)] = ∫₀¹ h(x) · 1 dx; the interval has width 1, so no width-scaling
/// factor appears.
///
/// The integrand's domain is assumed compatible with uniform [0, 1) sampling;
/// the estimator does not rescale for other intervals.
///
/// Each instance owns its engine, seeded from entropy by [`new`](Self::new)
/// or explicitly by [`from_seed`](Self::from_seed). Separate instances never
/// share engine state, so strategies compared in one run draw uncorrelated
/// streams.
///
/// # Examples
///
/// ```rust
/// use estimator_core::mc::{CrudeMonteCarlo, Integrator};
///
/// let mut integrator = CrudeMonteCarlo::from_seed(42);
///
/// // Quarter circle: the integral is pi
/// let quarter_circle = |x: f64| 4.0 * (1.0 - x * x).sqrt();
/// let estimate = integrator.estimate(&quarter_circle, 100_000)?;
///
/// assert!((estimate.value - std::f64::consts::PI).abs() < 0.05);
/// # Ok::<(), estimator_core::EstimatorError>(())
/// ```
pub struct CrudeMonteCarlo {
    rng: EstimatorRng,
}

impl CrudeMonteCarlo {
    /// Creates an estimator with an entropy-seeded engine.
    ///
    /// The effective seed is still recorded and observable through
    /// [`seed`](Self::seed), so unseeded runs remain reproducible after the
    /// fact.
    #[inline]
    pub fn new() -> Self {
        Self {
            rng: EstimatorRng::from_entropy(),
        }
    }

    /// Creates an estimator with an explicitly seeded engine.
    ///
    /// The same seed always produces the same sequence of estimates,
    /// bit for bit.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value for reproducibility
    ///
    /// # Examples
    ///
    /// ```rust
    /// use estimator_core::mc::{CrudeMonteCarlo, Integrator};
    ///
    /// let mut a = CrudeMonteCarlo::from_seed(123);
    /// let mut b = CrudeMonteCarlo::from_seed(123);
    ///
    /// let h = |x: f64| x;
    /// assert_eq!(a.estimate(&h, 1000)?, b.estimate(&h, 1000)?);
    /// # Ok::<(), estimator_core::EstimatorError>(())
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: EstimatorRng::from_seed(seed),
        }
    }

    /// Returns the seed of the owned engine.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Replaces the owned engine with one seeded from `seed`.
    ///
    /// Lets the same instance replay a run exactly without being rebuilt.
    #[inline]
    pub fn reset_seed(&mut self, seed: u64) {
        self.rng = EstimatorRng::from_seed(seed);
    }
}

impl Default for CrudeMonteCarlo {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for CrudeMonteCarlo {
    fn estimate(
        &mut self,
        integrand: &dyn Integrand,
        samples: usize,
    ) -> Result<Estimate, EstimatorError> {
        if samples == 0 {
            return Err(EstimatorError::InvalidSampleCount(samples));
        }

        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for _ in 0..samples {
            let value = integrand.eval(self.rng.gen_uniform());
            sum += value;
            sum_sq += value * value;
        }

        // Sum first, divide once after the loop
        let n = samples as f64;
        let mean = sum / n;
        let variance = (sum_sq / n) - mean * mean;
        let std_dev = variance.max(0.0).sqrt();
        let std_error = std_dev / n.sqrt();

        Ok(Estimate {
            value: mean,
            std_error,
            samples,
        })
    }
}
