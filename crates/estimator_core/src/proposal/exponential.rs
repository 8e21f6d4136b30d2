//! Exponential proposal on the half line.

use crate::error::EstimatorError;
use crate::proposal::Proposal;
use crate::rng::EstimatorRng;
use rand_distr::Exp;

/// Exponential proposal with density λe^{−λx} on [0, ∞).
///
/// Draws come from [`rand_distr::Exp`] through the owned variate source, so
/// seeded runs stay reproducible. Suits integrands over the half line with
/// exponential decay, where unit-interval proposals have no support.
///
/// # Examples
///
/// ```rust
/// use estimator_core::proposal::{Exponential, Proposal};
/// use estimator_core::rng::EstimatorRng;
///
/// let mut proposal = Exponential::new(EstimatorRng::from_seed(42), 1.0)
///     .expect("valid rate");
///
/// let x = proposal.draw();
/// assert!(x >= 0.0);
/// assert!(proposal.density(x) > 0.0);
/// assert_eq!(proposal.density(-1.0), 0.0);
/// ```
pub struct Exponential {
    rng: EstimatorRng,
    dist: Exp<f64>,
    rate: f64,
}

impl Exponential {
    /// Creates an exponential proposal with the given rate λ.
    ///
    /// # Arguments
    ///
    /// * `rng` - Variate source consumed by the sampler
    /// * `rate` - Rate parameter λ; must be finite and strictly positive
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidParameter`] if `rate` is not finite
    /// or not strictly positive.
    pub fn new(rng: EstimatorRng, rate: f64) -> Result<Self, EstimatorError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(EstimatorError::InvalidParameter {
                name: "rate",
                value: format!("must be finite and strictly positive, got {}", rate),
            });
        }
        let dist = Exp::new(rate).map_err(|e| EstimatorError::InvalidParameter {
            name: "rate",
            value: e.to_string(),
        })?;
        Ok(Self { rng, dist, rate })
    }

    /// Returns the rate parameter λ.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the seed of the embedded variate source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Proposal for Exponential {
    #[inline]
    fn density(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.rate * (-self.rate * x).exp()
        }
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        self.rng.sample(&self.dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_invalid_rate() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let result = Exponential::new(EstimatorRng::from_seed(42), bad);
            assert!(
                matches!(result, Err(EstimatorError::InvalidParameter { .. })),
                "Rate {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_density_closed_form() {
        let proposal = Exponential::new(EstimatorRng::from_seed(42), 2.0).expect("valid rate");

        assert_relative_eq!(proposal.density(0.0), 2.0, max_relative = 1e-14);
        assert_relative_eq!(
            proposal.density(1.0),
            2.0 * (-2.0_f64).exp(),
            max_relative = 1e-14
        );
        assert_eq!(proposal.density(-0.001), 0.0);
    }

    #[test]
    fn test_draws_non_negative() {
        let mut proposal = Exponential::new(EstimatorRng::from_seed(42), 1.5).expect("valid rate");

        for _ in 0..10_000 {
            let x = proposal.draw();
            assert!(x >= 0.0, "Draw {} is negative", x);
        }
    }

    #[test]
    fn test_sample_mean() {
        // E[X] = 1/rate
        let mut proposal = Exponential::new(EstimatorRng::from_seed(42), 2.0).expect("valid rate");
        let n = 100_000;
        let mean: f64 = (0..n).map(|_| proposal.draw()).sum::<f64>() / n as f64;

        assert!(
            (mean - 0.5).abs() < 0.01,
            "Sample mean {:.5} too far from 1/2",
            mean
        );
    }

    #[test]
    fn test_seeded_reproducibility() {
        let mut p1 = Exponential::new(EstimatorRng::from_seed(7), 1.0).expect("valid rate");
        let mut p2 = Exponential::new(EstimatorRng::from_seed(7), 1.0).expect("valid rate");

        for _ in 0..100 {
            assert_eq!(p1.draw(), p2.draw());
        }
    }

    #[test]
    fn test_rate_accessor() {
        let proposal = Exponential::new(EstimatorRng::from_seed(1), 3.5).expect("valid rate");
        assert_eq!(proposal.rate(), 3.5);
    }
}
