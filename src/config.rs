//! Configuration management and validation.
//!
//! Provides the explicit configuration value handed to the upstream client and
//! the HTTP server. Values are layered: built-in defaults, then environment
//! variables, then CLI overrides, followed by a final validation pass.

use crate::constants::{
    DEFAULT_API_KEY, DEFAULT_API_TIMEOUT_MS, DEFAULT_EXTERNAL_API_URL, DEFAULT_HOST, DEFAULT_PORT,
    FILE_DOWNLOAD_ENDPOINT, FILES_LIST_ENDPOINT, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Global configuration for the relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Remote file API settings
    pub upstream: UpstreamConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,

    /// Port to bind (0 picks an ephemeral port)
    pub port: u16,
}

/// Remote file API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Credential forwarded verbatim as the `Authorization` header
    pub api_key: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Path of the files-listing endpoint
    pub files_list_endpoint: String,

    /// Path prefix of the file-download endpoint
    pub file_download_endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXTERNAL_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_ms: DEFAULT_API_TIMEOUT_MS,
            files_list_endpoint: FILES_LIST_ENDPOINT.to_string(),
            file_download_endpoint: FILE_DOWNLOAD_ENDPOINT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unset variables fall back to defaults. Numeric variables that fail to
    /// parse, or parse to zero, also fall back to defaults. A URL or key that is
    /// set but empty is kept empty so that [`UpstreamConfig::is_configured`]
    /// reports it at request time.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup(env_vars::PORT)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|p| *p > 0)
        {
            config.server.port = port;
        }
        if let Some(host) = lookup(env_vars::HOST).filter(|h| !h.trim().is_empty()) {
            config.server.host = host.trim().to_string();
        }
        if let Some(base_url) = lookup(env_vars::EXTERNAL_API_URL) {
            config.upstream.set_base_url(&base_url);
        }
        if let Some(api_key) = lookup(env_vars::API_KEY) {
            config.upstream.api_key = api_key.trim().to_string();
        }
        if let Some(timeout_ms) = lookup(env_vars::API_TIMEOUT)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|t| *t > 0)
        {
            config.upstream.timeout_ms = timeout_ms;
        }

        debug!(
            "Loaded configuration: upstream={}, listen={}:{}",
            config.upstream.base_url, config.server.host, config.server.port
        );
        config
    }

    /// Validate configuration values that would make the relay unusable
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::configuration("Listen host cannot be empty"));
        }

        self.upstream.validate()
    }

    /// Socket address the server should bind to
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                Error::configuration(format!(
                    "Invalid listen address '{}:{}': {}",
                    self.server.host, self.server.port, e
                ))
            })
    }
}

impl UpstreamConfig {
    /// Set the base URL, trimming whitespace and trailing slashes
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
    }

    /// Whether both the base URL and the credential are present
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL of the files-listing endpoint
    pub fn files_list_url(&self) -> String {
        format!("{}{}", self.base_url, self.files_list_endpoint)
    }

    /// Full URL for downloading one file
    pub fn file_download_url(&self, filename: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url, self.file_download_endpoint, filename
        )
    }

    /// Validate upstream settings
    ///
    /// An empty URL or key is allowed here; the HTTP layer answers such
    /// requests with a configuration error instead of refusing to start.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::configuration(
                "Upstream timeout must be greater than 0 ms",
            ));
        }

        if !self.base_url.is_empty()
            && !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://"))
        {
            return Err(Error::configuration(format!(
                "Upstream base URL must start with http:// or https://: {}",
                self.base_url
            )));
        }

        for endpoint in [&self.files_list_endpoint, &self.file_download_endpoint] {
            if !endpoint.starts_with('/') {
                return Err(Error::configuration(format!(
                    "Upstream endpoint must start with '/': {}",
                    endpoint
                )));
            }
        }

        Ok(())
    }
}
