//! Slack CLI - Slack Message Reader
//!
//! Reads messages from the Slack Web API and prints them as indented JSON.
//! The bot token is read from `SLACK_BOT_TOKEN`.
//!
//! # Usage
//!
//! ```bash
//! # Latest 100 messages of a channel
//! slack-cli message get --channel C0123456789
//!
//! # A single message by timestamp
//! slack-cli message get -c C0123456789 -t 1712345678.123456
//!
//! # A message and its thread
//! slack-cli message get -c C0123456789 -t 1712345678.123456 --with-replies
//! ```
//!
//! Diagnostics go to stderr (`RUST_LOG` or `--log-level`); stdout only ever
//! carries the JSON result.

use clap::Parser;
use slack_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = cli.run().await?;
    println!("{output}");

    Ok(())
}
