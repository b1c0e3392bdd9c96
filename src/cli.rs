//! Command-line interface

use clap::{Parser, ValueEnum};

use memfit::alloc::FitPolicy;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Initial partition capacity list, e.g. "300, 600, 350, 200, 750, 125"
    #[arg(long)]
    pub partitions: Option<String>,

    /// Initial request size list, e.g. "115, 500, 358, 200, 375"
    #[arg(long)]
    pub requests: Option<String>,

    /// Fit policy selected at startup
    #[arg(long, value_enum, default_value_t = PolicyArg::FirstFit)]
    pub policy: PolicyArg,
}

/// Command-line spelling of the fit policies.
///
/// Kept separate from [`FitPolicy`] so the core stays free of clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PolicyArg {
    FirstFit,
    WorstFit,
    BestFit,
}

impl From<PolicyArg> for FitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FirstFit => FitPolicy::FirstFit,
            PolicyArg::WorstFit => FitPolicy::WorstFit,
            PolicyArg::BestFit => FitPolicy::BestFit,
        }
    }
}
