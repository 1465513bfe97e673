//! awsenv - Load deployment secrets into a shell.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use awsenv::cli::output;
use awsenv::cli::{execute, Cli};
use awsenv::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("awsenv=debug")
        } else {
            EnvFilter::new("awsenv=warn")
        }
    });

    // Logs go to stderr so stdout stays sourceable
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = output::suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
