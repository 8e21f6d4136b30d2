//! Random number generation for Monte Carlo integration.
//!
//! Provides seeded, reproducible uniform variate generation. Every estimator
//! and proposal owns its own [`EstimatorRng`] instance; nothing in the crate
//! draws from shared or global engine state.
//!
//! Note: This crate uses British English spelling conventions (e.g.,
//! "initialise" rather than "initialize") in documentation and internals.

mod prng;

pub use prng::EstimatorRng;
