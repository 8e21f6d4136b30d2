//! Integrand abstraction for definite-integral estimation.
//!
//! This module defines the [`Integrand`] trait, the seam between the things
//! being integrated and the estimation strategies in [`crate::mc`]. A blanket
//! implementation covers plain closures, so most call sites never implement
//! the trait by hand.

/// Trait for real-valued functions that can be integrated.
///
/// An integrand is a pure mapping from an evaluation point to a function
/// value. Estimators evaluate it at points drawn from their sampling
/// distribution; they never inspect it beyond calling [`eval`](Self::eval).
///
/// # Design Philosophy
///
/// The trait is object-safe by construction: estimators accept
/// `&dyn Integrand`, so one estimator instance can be reused across
/// integrands without monomorphisation. A blanket implementation for
/// `Fn(f64) -> f64` keeps the common case ergonomic:
///
/// ```rust
/// use estimator_core::Integrand;
///
/// let quadratic = |x: f64| x * x;
/// assert_eq!(quadratic.eval(3.0), 9.0);
/// ```
///
/// Named integrands with parameters implement the trait directly:
///
/// ```rust
/// use estimator_core::Integrand;
///
/// struct Scaled {
///     factor: f64,
/// }
///
/// impl Integrand for Scaled {
///     fn eval(&self, x: f64) -> f64 {
///         self.factor * x
///     }
/// }
///
/// let doubled = Scaled { factor: 2.0 };
/// assert_eq!(doubled.eval(1.5), 3.0);
/// ```
pub trait Integrand {
    /// Evaluates the integrand at the given point.
    ///
    /// # Arguments
    ///
    /// * `x` - Evaluation point
    ///
    /// # Returns
    /// The function value at `x`.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - Non-finite results are propagated by estimators, not masked
    fn eval(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
