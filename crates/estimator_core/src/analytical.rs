//! Closed-form reference integrals.
//!
//! This module provides integrands with known exact integrals, used by the
//! driver and the test suite to measure estimator accuracy.
//!
//! # Mathematical Background
//!
//! The quarter-circle benchmark integrates the upper-right quarter of a
//! circle of radius 1, scaled by 4:
//!
//! ```text
//! ∫₀¹ 4√(1 − x²) dx = π
//! ```
//!
//! so the absolute error of an estimate is directly readable against π. The
//! exponential-decay benchmark covers the half line:
//!
//! ```text
//! ∫₀^∞ e^{−kx} dx = 1/k
//! ```
//!
//! and exercises proposals with support outside the unit interval.

use num_traits::Float;

/// Exact value of the quarter-circle integral ∫₀¹ 4√(1 − x²) dx.
pub const QUARTER_CIRCLE_INTEGRAL: f64 = std::f64::consts::PI;

/// The quarter-circle integrand h(x) = 4√(1 − x²).
///
/// Defined for |x| ≤ 1; outside that range the square root of a negative
/// argument yields NaN, which estimators propagate rather than mask.
///
/// # Examples
///
/// ```rust
/// use estimator_core::analytical::quarter_circle;
///
/// assert_eq!(quarter_circle(0.0_f64), 4.0);
/// assert_eq!(quarter_circle(1.0_f64), 0.0);
/// ```
#[inline]
pub fn quarter_circle<T: Float>(x: T) -> T {
    let four = T::from(4.0).unwrap();
    four * (T::one() - x * x).sqrt()
}

/// The exponential-decay integrand h(x) = e^{−kx}.
///
/// # Arguments
///
/// * `rate` - Decay rate k
/// * `x` - Evaluation point
#[inline]
pub fn exp_decay<T: Float>(rate: T, x: T) -> T {
    (-rate * x).exp()
}

/// Exact value of the half-line integral ∫₀^∞ e^{−kx} dx = 1/k.
#[inline]
pub fn exp_decay_integral<T: Float>(rate: T) -> T {
    T::one() / rate
}
