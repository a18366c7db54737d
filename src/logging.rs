use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;

const DEFAULT_LOG_FILE: &str = "graphql-tutorial.log";

/// Targets whose events pass the default filter: the library and both binaries.
const TARGETS: &[&str] = &["graphql_tutorial", "hello", "tutorial"];

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber.
///
/// Logs go to stderr in compact form. When `settings.file` is set, JSON logs
/// are also written to that file with daily rotation. Calling this a second
/// time in the same process is a no-op.
pub fn init(settings: &LoggingSettings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings.verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let result = match &settings.file {
        Some(log_path) => {
            let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
            let _ = std::fs::create_dir_all(dir);
            let file_name = log_path
                .file_name()
                .map(|name| name.to_os_string())
                .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, file_name))
                .with_ansi(false)
                .json();

            subscriber.with(file_layer).try_init()
        }
        None => subscriber.try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
