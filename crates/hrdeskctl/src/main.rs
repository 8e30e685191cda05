//! hrdeskctl - command-line client for the HR Desk assistant

use anyhow::Result;
use clap::Parser;
use hrdeskctl::cli::Cli;
use hrdeskctl::{app, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    app::run(cli).await
}
