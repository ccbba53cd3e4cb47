//! Access review export command

use colored::Colorize;
use log::debug;

use crate::cli::Cli;
use crate::cli::progress::ProgressDisplay;
use crate::client::{OktaApi, OktaClient};
use crate::config::Config;
use crate::error::Result;
use crate::export::{AccessReview, Silent, collect_access_review};
use crate::output::{SummaryRow, format_table, write_csv};

/// Run the export: load config, walk the org, then write the report.
///
/// The report file is only touched after the whole traversal succeeded.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    debug!("Exporting access review from {}", config.base_url);

    let client = OktaClient::new(&config)?;
    let review = collect(&client, cli.quiet).await?;

    write_csv(&cli.output, &review.records)?;

    if !cli.quiet {
        let rows: Vec<SummaryRow> = review.applications.iter().map(SummaryRow::from).collect();
        println!("{}", format_table(&rows));
    }
    println!(
        "{} Data exported to {}",
        "✓".green(),
        cli.output.display()
    );

    Ok(())
}

async fn collect<C: OktaApi + ?Sized>(client: &C, quiet: bool) -> Result<AccessReview> {
    if quiet {
        return collect_access_review(client, &Silent).await;
    }

    let progress = ProgressDisplay::new();
    let result = collect_access_review(client, &progress).await;
    progress.finish();
    result
}
