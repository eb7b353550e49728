//! Tagwright CLI
//!
//! Validate, format and measure XML-tagged prompts.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so that command output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tagwright=debug,tagwright_core=debug,tagwright_token=debug"
    } else {
        "tagwright=info,tagwright_core=info,tagwright_token=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.execute()
}
