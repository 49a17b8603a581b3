//! CSV Relay Library
//!
//! A Rust library that proxies a remote file-listing/download API and reformats
//! the CSV payloads it serves into JSON records.
//!
//! This library provides tools for:
//! - Validating and parsing `filename,text,number,hex` CSV rows
//! - Aggregating whole files into `{file, lines}` records
//! - Fetching every listed file concurrently while tolerating per-file failures
//! - Serving the aggregated records over HTTP
//! - Comprehensive error handling with upstream context

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_parser;
        pub mod upstream;
    }
    pub mod api;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{FileRecord, FilesList, ParsedLine, RawFileContent};
pub use config::Config;

/// Result type alias for the CSV relay
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for relay operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The upstream request could not be completed (connection, timeout, body read)
    #[error("Upstream request to '{url}' failed: {source}")]
    UpstreamRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream body could not be decoded
    #[error("Invalid upstream payload from '{url}': {source}")]
    UpstreamPayload {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an upstream transport error
    pub fn upstream_request(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::UpstreamRequest {
            url: url.into(),
            source,
        }
    }

    /// Create an upstream status error
    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an upstream payload error
    pub fn upstream_payload(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::UpstreamPayload {
            url: url.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error originated from talking to the upstream API
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamRequest { .. } | Self::UpstreamStatus { .. } | Self::UpstreamPayload { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
