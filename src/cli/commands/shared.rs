//! Shared components for CLI commands
//!
//! Logging setup, configuration loading and output helpers used by more than
//! one command.

use crate::cli::args::{LoggingArgs, UpstreamArgs};
use crate::config::Config;
use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Set up structured logging on stderr
pub fn setup_logging(args: &LoggingArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_relay={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (defaults -> env -> args)
pub fn load_configuration(upstream: &UpstreamArgs) -> Result<Config> {
    let mut config = Config::from_env();
    upstream.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Serialize a value as JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| Error::serialization("Failed to serialize output", e))
}

/// Write JSON to a file, or to stdout when no file is given
pub async fn write_json<T: Serialize>(
    value: &T,
    pretty: bool,
    output_file: Option<&Path>,
) -> Result<()> {
    let json = to_json(value, pretty)?;

    match output_file {
        Some(path) => {
            tokio::fs::write(path, format!("{}\n", json))
                .await
                .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
            debug!("Wrote {} bytes to {}", json.len() + 1, path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
