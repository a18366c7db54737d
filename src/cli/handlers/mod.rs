mod hello;
mod tutorial;
mod utils;

pub use hello::handle_hello;
pub use tutorial::handle_tutorial;

use crate::config::TutorialConfig;

use super::Cli;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TutorialConfig,
    pub print_schema: bool,
}

impl CommandContext {
    /// Applies command-line flags on top of `config`.
    pub fn new(mut config: TutorialConfig, cli: &Cli) -> Self {
        config.output.pretty |= cli.pretty;
        config.logging.verbose |= cli.verbose;
        if cli.log_file.is_some() {
            config.logging.file = cli.log_file.clone();
        }
        Self {
            config,
            print_schema: cli.print_schema,
        }
    }
}
