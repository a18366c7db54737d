use std::process::ExitCode;

use clap::Parser;
use graphql_tutorial::cli::{Cli, Program, run};

fn main() -> ExitCode {
    match run(Cli::parse(), Program::Tutorial) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
