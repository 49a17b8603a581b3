//! Aggregation of downloaded files into serializable records

use super::file_parser::parse_csv_with_stats;
use super::stats::ParseStats;
use crate::app::models::{FileRecord, RawFileContent};
use tracing::debug;

/// Map each downloaded file to a [`FileRecord`] in input order
///
/// Entries without content are kept and produce an empty `lines` vector;
/// filtering failed downloads is the fetcher's job.
pub fn process_files(files: &[RawFileContent]) -> Vec<FileRecord> {
    process_files_with_stats(files).0
}

/// Like [`process_files`], also returning counters summed over all files
pub fn process_files_with_stats(files: &[RawFileContent]) -> (Vec<FileRecord>, ParseStats) {
    let mut totals = ParseStats::new();

    let records = files
        .iter()
        .map(|raw| {
            let (lines, stats) = parse_csv_with_stats(raw.content.as_deref());
            debug!(
                "Parsed {}: {} of {} rows kept",
                raw.filename, stats.lines_parsed, stats.total_lines
            );
            totals.merge(&stats);

            FileRecord {
                file: raw.filename.clone(),
                lines,
            }
        })
        .collect();

    (records, totals)
}

/// Total number of parsed rows across all records
pub fn total_lines(records: &[FileRecord]) -> usize {
    records.iter().map(|record| record.lines.len()).sum()
}
