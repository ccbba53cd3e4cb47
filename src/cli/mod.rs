//! CLI definition and handlers

use std::path::PathBuf;

use clap::Parser;

pub mod export;
pub mod progress;

/// Report path used when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "okta_access_review.csv";

/// Export Okta application → group → user assignments to a CSV access review.
///
/// Requires OKTA_API_TOKEN and OKTA_BASE_URL in the environment or in a .env file.
#[derive(Parser, Debug)]
#[command(name = "okta-access-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path of the CSV report to write (replaced if it exists)
    #[arg(
        long,
        short = 'o',
        env = "OKTA_EXPORT_OUTPUT",
        default_value = DEFAULT_OUTPUT,
        hide_env = true
    )]
    pub output: PathBuf,

    /// Hide progress bars and the summary table
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, env = "OKTA_EXPORT_DEBUG", hide_env = true)]
    pub debug: bool,
}
