//! Preview environments for pull requests, as a CI command line.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use kpreview_config::Config;
use kpreview_logging::configure_logging;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;
pub(crate) mod utils;

shadow!(build);

/// Build banner, logged once per run.
pub fn version_banner() -> String {
    format!(
        "{} {} ({} on {}, built {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH,
        build::BUILD_TIME_3339
    )
}

/// Run the command line from the process environment and arguments.
///
/// Options come from `.env`, then action inputs. Only the options needed by
/// the chosen command are checked.
pub fn run_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(build::PKG_VERSION.to_string());
    configure_logging(&config)?;
    info!(version = %version_banner(), message = "Starting");

    let args = Args::parse();
    config_validator::validate_configuration(&config, args.command_name(), args.scope())?;

    CommandExecutor::parse_args(config, args)
}
