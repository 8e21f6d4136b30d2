//! Montequad CLI - Command Line Operations for Monte Carlo Integration
//!
//! This is the operational entry point for the montequad estimation library.
//!
//! # Commands
//!
//! - `montequad compare` - Estimate the quarter-circle integral with both
//!   strategies and render the comparison table
//! - `montequad estimate` - Run a single named strategy and report the
//!   estimate with its uncertainty
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the E-S layout, this crate drives the
//! estimation kernel (`estimator_core`) and renders its results; no
//! estimation logic lives here.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Montequad Monte Carlo Integration CLI
#[derive(Parser)]
#[command(name = "montequad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the quarter-circle integral with both strategies
    Compare {
        /// Number of Monte Carlo samples per strategy
        #[arg(short = 'n', long, default_value = "10000")]
        samples: usize,

        /// Seed for reproducible runs (entropy-seeded when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run a single strategy and report the estimate with its uncertainty
    Estimate {
        /// Estimation method (crude, importance)
        #[arg(short, long, default_value = "crude")]
        method: String,

        /// Proposal for importance sampling (linear, root)
        #[arg(short, long)]
        proposal: Option<String>,

        /// Number of Monte Carlo samples
        #[arg(short = 'n', long, default_value = "10000")]
        samples: usize,

        /// Seed for reproducible runs (entropy-seeded when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Compare {
            samples,
            seed,
            format,
        } => commands::compare::run(samples, seed, &format),
        Commands::Estimate {
            method,
            proposal,
            samples,
            seed,
        } => commands::estimate::run(&method, proposal.as_deref(), samples, seed),
    }
}
