//! Application constants for the CSV relay
//!
//! This module contains wire-format constants, default configuration values,
//! and the response messages used throughout the relay.

// =============================================================================
// CSV Row Format
// =============================================================================

/// Exact number of comma-separated fields in a data row
pub const REQUIRED_FIELDS: usize = 4;

/// Exact length of the hex field
pub const HEX_LENGTH: usize = 32;

/// Anchored pattern for the hex field
pub const HEX_PATTERN: &str = r"^[0-9a-fA-F]{32}$";

/// Field delimiter (no quoting or escaping is supported)
pub const FIELD_DELIMITER: char = ',';

// =============================================================================
// Upstream API Defaults
// =============================================================================

/// Default upstream base URL
pub const DEFAULT_EXTERNAL_API_URL: &str = "https://echo-serv.tbxnet.com";

/// Default credential forwarded verbatim in the `Authorization` header
pub const DEFAULT_API_KEY: &str = "Bearer aSuperSecretKey";

/// Default per-request timeout in milliseconds
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Upstream endpoint listing the available files
pub const FILES_LIST_ENDPOINT: &str = "/v1/secret/files";

/// Upstream endpoint prefix for downloading a single file
pub const FILE_DOWNLOAD_ENDPOINT: &str = "/v1/secret/file";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default listen address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable names
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const HOST: &str = "HOST";
    pub const EXTERNAL_API_URL: &str = "EXTERNAL_API_URL";
    pub const API_KEY: &str = "API_KEY";
    pub const API_TIMEOUT: &str = "API_TIMEOUT";
}

/// Public routes exposed by the relay
pub mod routes {
    pub const ROOT: &str = "/";
    pub const FILES_DATA: &str = "/files/data";
    pub const FILES_LIST: &str = "/files/list";
}

// =============================================================================
// Response Messages
// =============================================================================

pub mod messages {
    pub const API_NAME: &str = "CSV Relay API";
    pub const STATUS_RUNNING: &str = "running";
    pub const SERVER_CONFIG_ERROR: &str = "Server configuration error";
    pub const API_URL_NOT_CONFIGURED: &str = "External API URL or API key not configured";
    pub const SERVICE_UNAVAILABLE: &str = "Service temporarily unavailable";
    pub const UNABLE_TO_FETCH: &str = "Unable to fetch data from external API";
    pub const NOT_FOUND: &str = "Not Found";
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// CORS headers attached to every response
pub mod cors {
    pub const ALLOW_ORIGIN: &str = "*";
    pub const ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";
    pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
}

// =============================================================================
// CLI Defaults
// =============================================================================

/// File pattern used when a directory is passed to the `parse` command
pub const CSV_FILE_PATTERN: &str = "*.csv";
