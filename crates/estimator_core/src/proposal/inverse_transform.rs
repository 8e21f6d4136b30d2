//! Generic inverse-transform proposal built from caller closures.

use crate::proposal::Proposal;
use crate::rng::EstimatorRng;

/// Proposal assembled from a density closure and an inverse-CDF closure.
///
/// Packages the standard construction for valid proposal pairs: pick a
/// density g whose CDF G has a closed-form inverse and draw x = G⁻¹(U) for
/// U ~ Uniform(0,1). The caller supplies both halves; no check is made that
/// the inverse CDF actually corresponds to the density.
///
/// # Examples
///
/// A quadratic ramp g(x) = 3x² on [0, 1], whose CDF x³ inverts to the cube
/// root:
///
/// ```rust
/// use estimator_core::proposal::{InverseTransform, Proposal};
/// use estimator_core::rng::EstimatorRng;
///
/// let mut proposal = InverseTransform::new(
///     EstimatorRng::from_seed(42),
///     |x: f64| if (0.0..=1.0).contains(&x) { 3.0 * x * x } else { 0.0 },
///     |u: f64| u.cbrt(),
/// );
///
/// let x = proposal.draw();
/// assert!(x >= 0.0 && x < 1.0);
/// assert!(proposal.density(0.5) > 0.0);
/// ```
pub struct InverseTransform<D, Q>
where
    D: Fn(f64) -> f64,
    Q: Fn(f64) -> f64,
{
    rng: EstimatorRng,
    density: D,
    inverse_cdf: Q,
}

impl<D, Q> InverseTransform<D, Q>
where
    D: Fn(f64) -> f64,
    Q: Fn(f64) -> f64,
{
    /// Creates an inverse-transform proposal from a density and the inverse
    /// of its CDF.
    ///
    /// The pair must satisfy the support contract: `density` must be
    /// strictly positive at every point `inverse_cdf` can return, or
    /// importance weights divide by zero. Mind the endpoints under
    /// floating-point rounding: a transform of the form 1 − f(1−u) can
    /// round onto an excluded right endpoint, so clamp the result inside
    /// the support as [`PowerRamp`](crate::proposal::PowerRamp) does.
    ///
    /// # Arguments
    ///
    /// * `rng` - Variate source supplying the uniform inputs
    /// * `density` - The proposal density g(x)
    /// * `inverse_cdf` - G⁻¹, mapping a uniform variate to a draw from g
    #[inline]
    pub fn new(rng: EstimatorRng, density: D, inverse_cdf: Q) -> Self {
        Self {
            rng,
            density,
            inverse_cdf,
        }
    }

    /// Returns the seed of the embedded variate source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<D, Q> Proposal for InverseTransform<D, Q>
where
    D: Fn(f64) -> f64,
    Q: Fn(f64) -> f64,
{
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (self.density)(x)
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        let u = self.rng.gen_uniform();
        (self.inverse_cdf)(u)
    }
}
