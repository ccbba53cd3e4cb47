//! okta-access-review - export Okta application access for periodic reviews

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod export;
mod output;

use cli::Cli;
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    cli::export::run(cli).await
}

/// Log to stderr; `--debug` raises this crate to debug level, `RUST_LOG` still applies otherwise.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
    }
    builder.init();
}
