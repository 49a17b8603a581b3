//! Command-line argument definitions for the CSV relay
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CSV relay
///
/// Proxies a remote file-listing API and reformats the CSV files it serves
/// into JSON, either as an HTTP service or as one-shot commands.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csv-relay",
    version,
    about = "Relay a remote CSV file API as JSON",
    long_about = "Fetches the file list of a remote API, downloads every listed CSV file \
                  concurrently, keeps only the well-formed `filename,text,number,hex` rows \
                  and serves the result as JSON. Files that fail to download are skipped."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Fetch and parse all files once and print the JSON records
    Fetch(FetchArgs),
    /// Print the upstream file list
    List(ListArgs),
    /// Parse local CSV files and print the JSON records
    Parse(ParseArgs),
}

/// Logging flags shared by every command
#[derive(Debug, Clone, Default, Parser)]
pub struct LoggingArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Upstream overrides shared by commands that talk to the remote API
///
/// Anything not given here comes from the environment (`EXTERNAL_API_URL`,
/// `API_KEY`, `API_TIMEOUT`) or the built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
pub struct UpstreamArgs {
    /// Upstream base URL
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Value sent verbatim in the Authorization header
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long = "timeout-ms", value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Address to bind (defaults to HOST or 0.0.0.0)
    #[arg(long = "host", value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to bind (defaults to PORT or 3000)
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the fetch command
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Only fetch this file
    #[arg(long = "file-name", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Write JSON to a file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// CSV files, directories (scanned for *.csv) or glob patterns
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Write JSON to a file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long = "pretty")]
    pub pretty: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl LoggingArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether human-readable summaries should be printed
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

impl UpstreamArgs {
    /// Apply explicitly given flags on top of an environment-derived config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.upstream.set_base_url(base_url);
        }
        if let Some(api_key) = &self.api_key {
            config.upstream.api_key = api_key.trim().to_string();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.upstream.timeout_ms = timeout_ms;
        }
    }
}

impl ServeArgs {
    /// Apply listener and upstream flags on top of an environment-derived config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        self.upstream.apply_overrides(config);
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.file_name {
            if name.trim().is_empty() {
                return Err(Error::configuration("File name filter cannot be empty"));
            }
        }
        validate_output_file(self.output_file.as_ref())
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.iter().all(|input| input.trim().is_empty()) {
            return Err(Error::configuration("At least one input path is required"));
        }
        validate_output_file(self.output_file.as_ref())
    }
}

fn validate_output_file(output_file: Option<&PathBuf>) -> Result<()> {
    if let Some(parent) = output_file.and_then(|file| file.parent()) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(Error::configuration(format!(
                "Output file directory does not exist: {}",
                parent.display()
            )));
        }
    }
    Ok(())
}
