//! CLI error types

use thiserror::Error;

/// Errors surfaced by the montequad CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line argument value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Estimation kernel error
    #[error(transparent)]
    Estimator(#[from] estimator_core::EstimatorError),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Convenience result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("bad format".to_string());
        assert_eq!(err.to_string(), "Invalid argument: bad format");
    }

    #[test]
    fn test_estimator_error_is_transparent() {
        let err: CliError = estimator_core::EstimatorError::InvalidSampleCount(0).into();
        assert_eq!(
            err.to_string(),
            "Invalid sample count 0: at least one sample is required"
        );
    }
}
