//! `parse` command: run the CSV parser over local files
//!
//! Inputs may be files, directories (scanned for `*.csv`) or glob patterns.
//! Unreadable files are skipped with a warning, mirroring how failed
//! downloads are skipped when relaying.

use super::shared::{setup_logging, write_json};
use crate::app::models::RawFileContent;
use crate::app::services::csv_parser::{process_files_with_stats, total_lines};
use crate::cli::args::ParseArgs;
use crate::constants::CSV_FILE_PATTERN;
use crate::{Error, Result};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub async fn run_parse(args: ParseArgs) -> anyhow::Result<()> {
    setup_logging(&args.logging);
    args.validate()?;

    let paths = collect_csv_paths(&args.inputs)?;
    let files = read_files(&paths).await;

    let (records, stats) = process_files_with_stats(&files);
    write_json(&records, args.pretty, args.output_file.as_deref()).await?;

    if args.logging.show_summary() {
        eprintln!("\n{}", "Parse Summary".bright_green().bold());
        eprintln!(
            "  {} {}",
            "Files parsed:".bright_cyan(),
            records.len().to_string().bright_white()
        );
        if files.len() < paths.len() {
            eprintln!(
                "  {} {}",
                "Files unreadable:".bright_red(),
                (paths.len() - files.len()).to_string().bright_red().bold()
            );
        }
        eprintln!(
            "  {} {} ({:.1}% of rows)",
            "Lines:".bright_cyan(),
            total_lines(&records).to_string().bright_white().bold(),
            stats.success_rate()
        );
    }

    Ok(())
}

/// Resolve inputs to a de-duplicated list of CSV file paths
pub fn collect_csv_paths(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs.iter().map(|i| i.trim()).filter(|i| !i.is_empty()) {
        let path = Path::new(input);

        if path.is_file() {
            paths.push(path.to_path_buf());
        } else if path.is_dir() {
            let pattern = path.join(CSV_FILE_PATTERN);
            paths.extend(expand_pattern(&pattern.to_string_lossy())?);
        } else {
            let matched = expand_pattern(input)?;
            if matched.is_empty() {
                warn!("No files matched '{}'", input);
            }
            paths.extend(matched);
        }
    }

    let mut seen = std::collections::HashSet::new();
    paths.retain(|p| seen.insert(p.clone()));

    if paths.is_empty() {
        return Err(Error::configuration(format!(
            "No CSV files found in: {}",
            inputs.join(", ")
        )));
    }

    debug!("Resolved {} input files", paths.len());
    Ok(paths)
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| {
        Error::configuration(format!("Invalid file pattern '{}': {}", pattern, e))
    })?;

    Ok(entries
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .collect())
}

/// Read each file, skipping the ones that cannot be read
async fn read_files(paths: &[PathBuf]) -> Vec<RawFileContent> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match tokio::fs::read_to_string(path).await {
            Ok(content) => files.push(RawFileContent::downloaded(filename, content)),
            Err(e) => warn!("Error reading file {}: {}", path.display(), e),
        }
    }

    files
}
