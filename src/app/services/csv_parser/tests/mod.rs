//! Test utilities for CSV parser testing
//!
//! Shared fixtures used across the parser test modules.

use crate::app::models::RawFileContent;


pub const VALID_HEX: &str = "70ad29aacf0b690b0467fe2b2767f765";
pub const OTHER_HEX: &str = "d33a8ca5d36d3106219f66f939774cf5";
pub const HEADER: &str = "file,text,number,hex";

/// Helper to build a well-formed data row
pub fn row(file: &str, text: &str, number: &str, hex: &str) -> String {
    format!("{},{},{},{}", file, text, number, hex)
}

/// Helper to create CSV content with a header and the given rows
pub fn create_test_csv(rows: &[&str]) -> String {
    let mut lines = vec![HEADER];
    lines.extend_from_slice(rows);
    lines.join("\n")
}

/// Helper to create a downloaded file entry
pub fn raw_file(filename: &str, content: &str) -> RawFileContent {
    RawFileContent::downloaded(filename, content)
}
