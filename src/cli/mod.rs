//! Command-line interface.

pub mod output;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::environment::Resolver;
use crate::core::materialize::Materializer;
use crate::core::store::SecretsManager;
use crate::error::Result;

/// awsenv - Load deployment secrets into a shell.
#[derive(Parser, Debug)]
#[command(
    name = "awsenv",
    about = "Print deployment secrets from AWS Secrets Manager as shell exports",
    version,
    after_help = "Usage in a shell: eval \"$(awsenv prod)\""
)]
pub struct Cli {
    /// Environment to load (e.g. prod, test, dev); uses the default when omitted
    pub environment: Option<String>,

    /// Config file replacing the built-in environment table
    #[arg(short, long, env = constants::CONFIG_VAR)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolve the environment and materialize its secrets.
///
/// Returns the export block, or `None` when there is nothing to print.
///
/// # Errors
///
/// Returns the first fatal error: configuration, unknown environment,
/// store failure or malformed payload.
pub fn run(cli: &Cli) -> Result<Option<String>> {
    let config = Config::load(cli.config.as_deref())?;
    let resolver = Resolver::new(&config);
    let secret_id = resolver.resolve(cli.environment.as_deref())?;

    let materializer = Materializer::new(SecretsManager::from_env(), config.override_var.clone());
    materializer.materialize(secret_id, &config.region)
}

/// Execute the CLI, printing the export block to stdout.
pub fn execute(cli: Cli) -> Result<()> {
    match run(&cli)? {
        Some(block) => {
            // Only the formatted block is wiped; the decoded payload is not
            let block = Zeroizing::new(block);
            output::exports(&block);
        }
        None => debug!("nothing to export"),
    }
    Ok(())
}
