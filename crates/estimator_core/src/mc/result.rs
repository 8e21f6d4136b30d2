//! Estimation result type.

/// Result of one Monte Carlo integration run.
///
/// Carries the point estimate together with its sampling uncertainty and the
/// sample count that produced it. The standard error uses the population
/// variance of the per-draw contributions, clamped at zero before the square
/// root so constant integrands report exactly zero uncertainty.
///
/// # Examples
///
/// ```rust
/// use estimator_core::mc::Estimate;
///
/// let result = Estimate {
///     value: 3.14,
///     std_error: 0.01,
///     samples: 10_000,
/// };
///
/// println!("Integral: {} +/- {}", result.value, result.confidence_95());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    /// Point estimate of the definite integral.
    pub value: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of samples the estimate was built from.
    pub samples: usize,
}

impl Estimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Returns the absolute error against a known reference value.
    ///
    /// # Arguments
    ///
    /// * `reference` - The exact value of the integral
    #[inline]
    pub fn absolute_error(&self, reference: f64) -> f64 {
        (self.value - reference).abs()
    }

    /// Returns `true` when both the value and standard error are finite.
    ///
    /// A degenerate proposal density or an integrand that is undefined on
    /// part of the sampling domain poisons the estimate with infinite or NaN
    /// terms; this is the post-hoc check for that condition.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.std_error.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_intervals() {
        let result = Estimate {
            value: 3.14,
            std_error: 0.1,
            samples: 1000,
        };

        assert!((result.confidence_95() - 0.196).abs() < 1e-12);
        assert!((result.confidence_99() - 0.2576).abs() < 1e-12);
    }

    #[test]
    fn test_absolute_error() {
        let result = Estimate {
            value: 3.0,
            std_error: 0.05,
            samples: 100,
        };

        assert!((result.absolute_error(std::f64::consts::PI) - 0.14159265358979312).abs() < 1e-12);
        assert_eq!(result.absolute_error(3.0), 0.0);
    }

    #[test]
    fn test_is_finite() {
        let good = Estimate {
            value: 1.0,
            std_error: 0.1,
            samples: 10,
        };
        assert!(good.is_finite());

        let poisoned_value = Estimate {
            value: f64::INFINITY,
            std_error: 0.0,
            samples: 10,
        };
        assert!(!poisoned_value.is_finite());

        let poisoned_error = Estimate {
            value: 1.0,
            std_error: f64::NAN,
            samples: 10,
        };
        assert!(!poisoned_error.is_finite());
    }

    #[test]
    fn test_default() {
        let result = Estimate::default();
        assert_eq!(result.value, 0.0);
        assert_eq!(result.std_error, 0.0);
        assert_eq!(result.samples, 0);
    }
}
