//! The integration-strategy abstraction.

use crate::error::EstimatorError;
use crate::integrand::Integrand;
use crate::mc::Estimate;

/// Trait for Monte Carlo definite-integral estimation strategies.
///
/// Exactly two strategies implement this trait:
/// [`CrudeMonteCarlo`](crate::mc::CrudeMonteCarlo) and
/// [`ImportanceSampling`](crate::mc::ImportanceSampling). They are
/// substitutable: a caller holding `&mut dyn Integrator` cannot distinguish
/// them except by the variance of the estimates they return.
///
/// # Examples
///
/// ```rust
/// use estimator_core::mc::{CrudeMonteCarlo, Integrator};
///
/// let mut integrator = CrudeMonteCarlo::from_seed(42);
/// let estimate = integrator.estimate(&|x: f64| x * x, 10_000)?;
///
/// // Estimates 1/3 with sampling noise
/// assert!((estimate.value - 1.0 / 3.0).abs() < 0.05);
/// # Ok::<(), estimator_core::EstimatorError>(())
/// ```
pub trait Integrator {
    /// Estimates the integral of the target function using `samples` draws.
    ///
    /// Each call draws fresh samples from the strategy's sampling
    /// distribution, so repeated calls with identical inputs yield different
    /// results unless the instance is explicitly reseeded.
    ///
    /// # Arguments
    ///
    /// * `integrand` - The target function h(x)
    /// * `samples` - Number of draws; must be at least 1
    ///
    /// # Returns
    /// The estimate together with its standard error and sample count.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidSampleCount`] when `samples` is zero.
    /// No error is raised for an integrand that is undefined on part of the
    /// sampling domain; non-finite terms propagate into the returned estimate
    /// (check with [`Estimate::is_finite`]).
    fn estimate(
        &mut self,
        integrand: &dyn Integrand,
        samples: usize,
    ) -> Result<Estimate, EstimatorError>;
}
