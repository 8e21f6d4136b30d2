//! Estimate command implementation
//!
//! Runs a single named strategy against the quarter-circle benchmark and
//! reports the estimate with its uncertainty.

use estimator_core::analytical::{quarter_circle, QUARTER_CIRCLE_INTEGRAL};
use estimator_core::proposal::PowerRamp;
use estimator_core::rng::EstimatorRng;
use estimator_core::{CrudeMonteCarlo, Estimate, ImportanceSampling, Integrator};
use tracing::{info, warn};

use crate::{CliError, Result};

/// Run the estimate command
pub fn run(method: &str, proposal: Option<&str>, samples: usize, seed: Option<u64>) -> Result<()> {
    info!("Starting single-strategy run...");
    info!("  Method: {}", method);
    info!("  Samples: {}", samples);

    let seed = seed.unwrap_or_else(|| EstimatorRng::from_entropy().seed());
    info!("  Seed: {}", seed);

    let h = |x: f64| quarter_circle(x);

    let estimate = match method {
        "crude" => {
            if proposal.is_some() {
                return Err(CliError::InvalidArgument(
                    "--proposal only applies to the importance method".to_string(),
                ));
            }
            CrudeMonteCarlo::from_seed(seed).estimate(&h, samples)?
        }
        "importance" => {
            let rng = EstimatorRng::from_seed(seed);
            let ramp = match proposal.unwrap_or("root") {
                "root" => PowerRamp::square_root(rng),
                "linear" => PowerRamp::linear(rng),
                other => {
                    return Err(CliError::InvalidArgument(format!(
                        "Unknown proposal: {}. Supported: linear, root",
                        other
                    )));
                }
            };
            ImportanceSampling::new(ramp).estimate(&h, samples)?
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown method: {}. Supported: crude, importance",
                other
            )));
        }
    };

    if !estimate.is_finite() {
        warn!("Estimate is not finite; check the proposal support");
    }

    report(method, &estimate);
    info!("Estimation complete");
    Ok(())
}

/// Prints the estimate block.
fn report(method: &str, estimate: &Estimate) {
    println!();
    println!("Method:          {}", method);
    println!("Samples:         {}", estimate.samples);
    println!("Estimate:        {:.10}", estimate.value);
    println!("Std error:       {:.10}", estimate.std_error);
    println!(
        "95% interval:    [{:.10}, {:.10}]",
        estimate.value - estimate.confidence_95(),
        estimate.value + estimate.confidence_95()
    );
    println!(
        "Absolute error:  {:.10}  (reference = pi)",
        estimate.absolute_error(QUARTER_CIRCLE_INTEGRAL)
    );
    println!();
}
