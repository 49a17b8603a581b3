//! `fetch` command: one-shot fetch, parse and print

use super::shared::{load_configuration, setup_logging, write_json};
use crate::app::services::csv_parser::{process_files_with_stats, total_lines};
use crate::app::services::upstream::{HttpFileSource, get_files_with_content};
use crate::cli::args::FetchArgs;
use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

pub async fn run_fetch(args: FetchArgs) -> Result<()> {
    setup_logging(&args.logging);
    args.validate()?;

    let start_time = Instant::now();
    let config = load_configuration(&args.upstream)?;
    let source = HttpFileSource::new(&config.upstream)?;

    info!("Fetching files from {}", config.upstream.base_url);
    let files = get_files_with_content(&source, args.file_name.as_deref())
        .await
        .context("unable to fetch data from external API")?;

    let (records, stats) = process_files_with_stats(&files);
    write_json(&records, args.pretty, args.output_file.as_deref()).await?;

    if args.logging.show_summary() {
        eprintln!("\n{}", "Fetch Summary".bright_green().bold());
        eprintln!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            start_time.elapsed().as_millis().to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Files:".bright_cyan(),
            records.len().to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Lines:".bright_cyan(),
            total_lines(&records).to_string().bright_white().bold()
        );
        if stats.lines_skipped > 0 {
            eprintln!(
                "  {} {}",
                "Malformed rows dropped:".bright_yellow(),
                stats.lines_skipped.to_string().bright_yellow()
            );
        }
    }

    Ok(())
}
