//! Data models for the CSV relay
//!
//! This module contains the records passed between the upstream fetcher, the
//! CSV parser and the HTTP layer. Serialized field names match the JSON
//! contract consumed by the frontend table.

use serde::{Deserialize, Serialize};

// =============================================================================
// Upstream Payloads
// =============================================================================

/// Body of the upstream files-listing endpoint (and of `GET /files/list`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilesList {
    /// Filenames available for download; a missing field means no files
    #[serde(default)]
    pub files: Vec<String>,
}

/// One downloaded file before parsing
///
/// `content` is `None` when the download failed. The fetch orchestrator drops
/// such entries, so anything it returns carries `Some` content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawFileContent {
    pub filename: String,
    pub content: Option<String>,
}

impl RawFileContent {
    /// Create an entry for a successfully downloaded file
    pub fn downloaded(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: Some(content.into()),
        }
    }

    /// Create an entry for a file whose download failed
    pub fn failed(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: None,
        }
    }

    /// Whether the download produced a body
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

// =============================================================================
// Parsed Records
// =============================================================================

/// One validated data row
///
/// The per-row filename column is validated but not kept; the owning
/// [`FileRecord`] carries the filename instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedLine {
    pub text: String,
    /// Leading integer of the number field; rows whose prefix overflows `i64` are skipped
    pub number: i64,
    pub hex: String,
}

/// All valid rows of one downloaded file, in input order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileRecord {
    pub file: String,
    pub lines: Vec<ParsedLine>,
}

impl FileRecord {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
