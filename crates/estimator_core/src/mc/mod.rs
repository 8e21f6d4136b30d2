//! Monte Carlo integration strategies.
//!
//! This module provides the integration-strategy abstraction and its two
//! implementers: crude (uniform) Monte Carlo and importance sampling with a
//! caller-supplied proposal distribution.
//!
//! # Architecture
//!
//! ```text
//! Integrator (trait: estimate)
//! ├── CrudeMonteCarlo        (owns an EstimatorRng, samples Uniform[0,1))
//! └── ImportanceSampling<P>  (owns a Proposal, corrects by h(x)/g(x))
//!         └── Estimate       (value, std_error, samples)
//! ```
//!
//! Both strategies validate the sample count up front, accumulate a running
//! sum and sum of squares in one pass, and divide once after the loop. The
//! returned [`Estimate`] carries the standard error alongside the value, so
//! callers can judge the sampling uncertainty without rerunning.
//!
//! # Examples
//!
//! ```rust
//! use estimator_core::mc::{CrudeMonteCarlo, ImportanceSampling, Integrator};
//! use estimator_core::proposal::PowerRamp;
//! use estimator_core::rng::EstimatorRng;
//!
//! let quarter_circle = |x: f64| 4.0 * (1.0 - x * x).sqrt();
//!
//! let mut crude = CrudeMonteCarlo::from_seed(42);
//! let mut importance = ImportanceSampling::new(
//!     PowerRamp::square_root(EstimatorRng::from_seed(43)),
//! );
//!
//! // Both strategies behind one interface
//! let strategies: [&mut dyn Integrator; 2] = [&mut crude, &mut importance];
//! for strategy in strategies {
//!     let estimate = strategy.estimate(&quarter_circle, 50_000)?;
//!     assert!((estimate.value - std::f64::consts::PI).abs() < 0.05);
//! }
//! # Ok::<(), estimator_core::EstimatorError>(())
//! ```

pub mod crude;
pub mod importance;
pub mod integrator;
pub mod result;

// Re-exports for convenient access
pub use crude::CrudeMonteCarlo;
pub use importance::ImportanceSampling;
pub use integrator::Integrator;
pub use result::Estimate;
