//! Fully general proposal from a caller-supplied closure pair.

use crate::proposal::Proposal;

/// Proposal built from an arbitrary (density, generator) closure pair.
///
/// The escape hatch for proposals the stock types do not cover: the caller
/// supplies the density and a generator closure that owns whatever sampling
/// state it needs (rejection samplers, table lookups, external engines). The
/// two halves must describe the same distribution; nothing here checks that
/// they do.
///
/// # Examples
///
/// ```rust
/// use estimator_core::proposal::{ClosureProposal, Proposal};
/// use estimator_core::rng::EstimatorRng;
///
/// let mut rng = EstimatorRng::from_seed(42);
/// let mut proposal = ClosureProposal::new(
///     |x: f64| if (0.0..1.0).contains(&x) { 1.0 } else { 0.0 },
///     move || rng.gen_uniform(),
/// );
///
/// let x = proposal.draw();
/// assert!(x >= 0.0 && x < 1.0);
/// assert_eq!(proposal.density(x), 1.0);
/// ```
pub struct ClosureProposal<D, G>
where
    D: Fn(f64) -> f64,
    G: FnMut() -> f64,
{
    density: D,
    generator: G,
}

impl<D, G> ClosureProposal<D, G>
where
    D: Fn(f64) -> f64,
    G: FnMut() -> f64,
{
    /// Creates a proposal from a density closure and a generator closure.
    ///
    /// The pair must satisfy the support contract: `density` must be
    /// strictly positive at every point `generator` can return, or
    /// importance weights divide by zero. Generators built on inverse
    /// transforms should clamp away from excluded endpoints, where
    /// floating-point rounding can otherwise land a draw.
    ///
    /// # Arguments
    ///
    /// * `density` - The proposal density g(x)
    /// * `generator` - Produces one draw from g per invocation
    #[inline]
    pub fn new(density: D, generator: G) -> Self {
        Self { density, generator }
    }
}

impl<D, G> Proposal for ClosureProposal<D, G>
where
    D: Fn(f64) -> f64,
    G: FnMut() -> f64,
{
    #[inline]
    fn density(&self, x: f64) -> f64 {
        (self.density)(x)
    }

    #[inline]
    fn draw(&mut self) -> f64 {
        (self.generator)()
    }
}
