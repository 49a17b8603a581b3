//! Abstraction over where relayed files come from

use crate::Result;

/// Provides the file list and file bodies of the remote API
#[async_trait::async_trait]
pub trait FileSource: Send + Sync {
    /// Human-readable label identifying this source (used in logs)
    fn label(&self) -> &str;

    /// Fetch the names of all downloadable files
    async fn get_files_list(&self) -> Result<Vec<String>>;

    /// Download the raw text of one file
    async fn download_file(&self, filename: &str) -> Result<String>;
}
