//! Error types for the estimation kernel.
//!
//! This module defines structured error types for request validation in the
//! Monte Carlo integration engine. Numerical poisoning (a proposal density
//! vanishing under a sampled point, or an integrand returning NaN) is
//! deliberately *not* represented here: such values propagate through the
//! estimate itself, as documented on
//! [`ImportanceSampling`](crate::mc::ImportanceSampling).

use thiserror::Error;

/// Validation error for estimator construction and estimate calls.
///
/// These errors are raised before any sample is drawn; once a loop starts,
/// every draw is accepted and contributes to the sum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// Sample count outside the valid range (at least one draw is required).
    #[error("Invalid sample count {0}: at least one sample is required")]
    InvalidSampleCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
