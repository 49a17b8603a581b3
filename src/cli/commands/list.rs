//! `list` command: print the upstream file list

use super::shared::{load_configuration, setup_logging, write_json};
use crate::app::models::FilesList;
use crate::app::services::upstream::{FileSource, HttpFileSource};
use crate::cli::args::ListArgs;
use anyhow::{Context, Result};

pub async fn run_list(args: ListArgs) -> Result<()> {
    setup_logging(&args.logging);

    let config = load_configuration(&args.upstream)?;
    let source = HttpFileSource::new(&config.upstream)?;

    let files = source
        .get_files_list()
        .await
        .context("unable to fetch file list from external API")?;

    write_json(&FilesList { files }, args.pretty, None).await?;
    Ok(())
}
