//! Test utilities and mock infrastructure for upstream access testing

use crate::app::services::upstream::FileSource;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::Barrier;

// Test modules
mod orchestrator_tests;

/// In-memory file source for testing
///
/// Files registered with [`MockFileSource::with_file`] download successfully,
/// files registered with [`MockFileSource::with_failing_file`] fail with an
/// upstream status error, and unknown files fail with a 404.
#[derive(Debug, Default)]
pub struct MockFileSource {
    files: Vec<String>,
    contents: HashMap<String, String>,
    list_failure: Option<u16>,
    barrier: Option<Barrier>,
    downloads: Mutex<Vec<String>>,
}

impl MockFileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// List a file that downloads successfully
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push(name.to_string());
        self.contents.insert(name.to_string(), content.to_string());
        self
    }

    /// List a file whose download fails
    pub fn with_failing_file(mut self, name: &str) -> Self {
        self.files.push(name.to_string());
        self
    }

    /// Make the list request fail with the given status
    pub fn with_list_failure(mut self, status: u16) -> Self {
        self.list_failure = Some(status);
        self
    }

    /// Block every download until `count` downloads are in flight together
    pub fn with_rendezvous(mut self, count: usize) -> Self {
        self.barrier = Some(Barrier::new(count));
        self
    }

    /// Filenames requested so far, in request order
    pub fn downloads(&self) -> Vec<String> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FileSource for MockFileSource {
    fn label(&self) -> &str {
        "mock"
    }

    async fn get_files_list(&self) -> Result<Vec<String>> {
        match self.list_failure {
            Some(status) => Err(Error::upstream_status(status, "list unavailable")),
            None => Ok(self.files.clone()),
        }
    }

    async fn download_file(&self, filename: &str) -> Result<String> {
        self.downloads.lock().unwrap().push(filename.to_string());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if !self.files.iter().any(|f| f == filename) {
            return Err(Error::upstream_status(404, "not found"));
        }

        self.contents
            .get(filename)
            .cloned()
            .ok_or_else(|| Error::upstream_status(500, "download failed"))
    }
}

pub const SAMPLE_CSV: &str = "file,text,number,hex\n\
                              f1.csv,RgTya,64075909,70ad29aacf0b690b0467fe2b2767f765";
