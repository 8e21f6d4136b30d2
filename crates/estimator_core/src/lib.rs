//! # Estimator Core (Layer E: Estimation Kernel)
//!
//! ## Role
//!
//! estimator_core houses the Monte Carlo definite-integral estimation kernel:
//!
//! - seeded, reproducible random variate generation ([`rng`])
//! - the polymorphic [`Integrator`](mc::Integrator) abstraction with its two
//!   strategies, crude Monte Carlo and importance sampling ([`mc`])
//! - stock proposal distributions for importance sampling ([`proposal`])
//! - closed-form reference integrals for accuracy measurement ([`analytical`])
//!
//! ## Usage Example
//!
//! ```rust
//! use estimator_core::analytical::{quarter_circle, QUARTER_CIRCLE_INTEGRAL};
//! use estimator_core::{CrudeMonteCarlo, Integrator};
//!
//! let mut integrator = CrudeMonteCarlo::from_seed(42);
//! let estimate = integrator.estimate(&|x: f64| quarter_circle(x), 100_000)?;
//!
//! // The quarter-circle integral is pi
//! assert!(estimate.absolute_error(QUARTER_CIRCLE_INTEGRAL) < 0.1);
//! # Ok::<(), estimator_core::EstimatorError>(())
//! ```
//!
//! ## Variance Reduction
//!
//! Importance sampling draws from a proposal density g shaped like the
//! integrand and corrects each draw by the likelihood ratio h(x)/g(x). With a
//! well-matched proposal the estimate carries markedly less variance than
//! crude sampling at the same cost:
//!
//! ```rust
//! use estimator_core::proposal::PowerRamp;
//! use estimator_core::rng::EstimatorRng;
//! use estimator_core::{ImportanceSampling, Integrator};
//!
//! let proposal = PowerRamp::square_root(EstimatorRng::from_seed(42));
//! let mut integrator = ImportanceSampling::new(proposal);
//!
//! let quarter_circle = |x: f64| 4.0 * (1.0 - x * x).sqrt();
//! let estimate = integrator.estimate(&quarter_circle, 10_000)?;
//!
//! assert!((estimate.value - std::f64::consts::PI).abs() < 0.05);
//! # Ok::<(), estimator_core::EstimatorError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

// Shared error type
pub mod error;

// Random number generation infrastructure
pub mod rng;

// Target-function abstraction
pub mod integrand;

// Proposal distributions for importance sampling
pub mod proposal;

// Integration strategies
pub mod mc;

// Closed-form reference integrals
pub mod analytical;

// Re-export commonly used items for convenience
pub use error::EstimatorError;
pub use integrand::Integrand;
pub use mc::{CrudeMonteCarlo, Estimate, ImportanceSampling, Integrator};
pub use proposal::{
    ClosureProposal, Exponential, InverseTransform, PowerRamp, Proposal, UnitUniform,
};
pub use rng::EstimatorRng;
