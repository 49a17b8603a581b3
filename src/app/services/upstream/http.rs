//! Authenticated HTTP access to the remote file API
//!
//! Every request forwards the configured credential as the `Authorization`
//! header and is bounded by the configured timeout. A 2xx response resolves to
//! its full body; any other status becomes [`Error::UpstreamStatus`] carrying
//! the status code and body.

use super::source::FileSource;
use crate::app::models::FilesList;
use crate::config::UpstreamConfig;
use crate::{Error, Result};
use reqwest::header::AUTHORIZATION;
use tracing::{debug, trace};

/// [`FileSource`] backed by the remote HTTP API
#[derive(Debug, Clone)]
pub struct HttpFileSource {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpFileSource {
    /// Create a source with one shared connection pool for all requests
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::upstream_request(config.base_url.clone(), e))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Settings this source was built from
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Issue one authenticated GET and return the body of a 2xx response
    async fn make_request(&self, url: &str) -> Result<String> {
        trace!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| Error::upstream_request(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::upstream_request(url, e))?;

        if status.is_success() {
            debug!("GET {} -> {} ({} bytes)", url, status.as_u16(), body.len());
            Ok(body)
        } else {
            Err(Error::upstream_status(status.as_u16(), body))
        }
    }
}

#[async_trait::async_trait]
impl FileSource for HttpFileSource {
    fn label(&self) -> &str {
        &self.config.base_url
    }

    async fn get_files_list(&self) -> Result<Vec<String>> {
        let url = self.config.files_list_url();
        let body = self.make_request(&url).await?;

        let list: FilesList =
            serde_json::from_str(&body).map_err(|e| Error::upstream_payload(&url, e))?;
        Ok(list.files)
    }

    async fn download_file(&self, filename: &str) -> Result<String> {
        let url = self.config.file_download_url(filename);
        self.make_request(&url).await
    }
}
