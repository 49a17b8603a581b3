//! Parsing statistics for relayed CSV files

use serde::{Deserialize, Serialize};

/// Counters for one parse pass over a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Data rows seen after the header
    pub total_lines: usize,

    /// Rows that produced a record
    pub lines_parsed: usize,

    /// Rows dropped as malformed
    pub lines_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one data row
    pub fn record(&mut self, parsed: bool) {
        self.total_lines += 1;
        if parsed {
            self.lines_parsed += 1;
        } else {
            self.lines_skipped += 1;
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.lines_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Fold another file's counters into these
    pub fn merge(&mut self, other: &ParseStats) {
        self.total_lines += other.total_lines;
        self.lines_parsed += other.lines_parsed;
        self.lines_skipped += other.lines_skipped;
    }
}
