//! CSV parser for relayed file payloads
//!
//! Turns the raw text served by the upstream file API into validated records.
//! Each data row has the form `filename,text,number,hex`; the first non-blank
//! line of a file is a header and is always discarded. Malformed rows are
//! dropped silently and never surface as errors.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Field splitting, integer-prefix reading and hex validation
//! - [`line_parser`] - Single row validation into a [`ParsedLine`](crate::ParsedLine)
//! - [`file_parser`] - Whole-file parsing with header handling
//! - [`aggregator`] - Mapping downloaded files into [`FileRecord`](crate::FileRecord)s
//! - [`stats`] - Per-file parse counters for diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use csv_relay::app::services::csv_parser::parse_csv;
//!
//! let content = "file,text,number,hex\n\
//!                file1.csv,RgTya,64075909,70ad29aacf0b690b0467fe2b2767f765";
//! let lines = parse_csv(Some(content));
//! assert_eq!(lines.len(), 1);
//! assert_eq!(lines[0].number, 64075909);
//! ```

pub mod aggregator;
pub mod field_parsers;
pub mod file_parser;
pub mod line_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use aggregator::{process_files, process_files_with_stats, total_lines};
pub use field_parsers::is_valid_hex;
pub use file_parser::{parse_csv, parse_csv_with_stats};
pub use line_parser::parse_line;
pub use stats::ParseStats;
