use clap::Parser;
use std::path::PathBuf;

/// Flags shared by the `hello` and `tutorial` programs. All are optional;
/// without them each program runs its fixed query and prints the result.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Run a fixed GraphQL query against an in-memory dataset"
)]
pub struct Cli {
    /// Enable verbose (DEBUG) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,

    /// Print the schema in SDL instead of running the query
    #[arg(long)]
    pub print_schema: bool,
}
