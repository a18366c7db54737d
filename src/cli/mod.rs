//! Command-line entry points shared by the example binaries.

mod commands;
pub mod handlers;

pub use commands::Cli;

use anyhow::{Context, Result};

use crate::config::TutorialConfig;
use crate::logging;
use handlers::CommandContext;

/// The two example programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Hello,
    Tutorial,
}

/// Loads configuration, installs logging and runs `program`.
pub fn run(cli: Cli, program: Program) -> Result<()> {
    let config = match TutorialConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            logging::init(&crate::config::LoggingSettings {
                verbose: cli.verbose,
                file: cli.log_file.clone(),
            });
            return Err(err).context("Failed to load configuration");
        }
    };

    let ctx = CommandContext::new(config, &cli);
    logging::init(&ctx.config.logging);
    tracing::debug!(?program, "Starting");

    match program {
        Program::Hello => handlers::handle_hello(&ctx),
        Program::Tutorial => handlers::handle_tutorial(&ctx),
    }
}
