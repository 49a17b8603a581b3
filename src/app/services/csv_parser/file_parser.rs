//! Whole-file parsing for relayed CSV payloads
//!
//! Splits content into lines, drops blank lines and the header, and keeps
//! every row that passes [`parse_line`].

use super::line_parser::parse_line;
use super::stats::ParseStats;
use crate::app::models::ParsedLine;
use tracing::debug;

/// Parse a file's content into its valid rows
///
/// Absent content, empty content and header-only content all yield an empty
/// vector. Invalid rows are filtered out while valid rows keep their order.
pub fn parse_csv(content: Option<&str>) -> Vec<ParsedLine> {
    parse_csv_with_stats(content).0
}

/// Parse a file's content and report how many rows were kept or dropped
pub fn parse_csv_with_stats(content: Option<&str>) -> (Vec<ParsedLine>, ParseStats) {
    let mut stats = ParseStats::new();

    let Some(content) = content else {
        return (Vec::new(), stats);
    };

    let lines: Vec<&str> = content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // Header-only or empty
    if lines.len() < 2 {
        return (Vec::new(), stats);
    }

    let mut parsed = Vec::with_capacity(lines.len() - 1);
    for (index, line) in lines.iter().enumerate().skip(1) {
        match parse_line(line) {
            Some(record) => {
                parsed.push(record);
                stats.record(true);
            }
            None => {
                debug!("Skipping malformed row {}: '{}'", index, line);
                stats.record(false);
            }
        }
    }

    (parsed, stats)
}
