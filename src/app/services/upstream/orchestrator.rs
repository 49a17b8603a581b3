//! Fan-out fetching of every listed file
//!
//! The list request runs first and its failure is the caller's failure. Each
//! file is then downloaded concurrently inside its own failure boundary, all
//! downloads are awaited, and failed ones are dropped from the result.

use super::source::FileSource;
use crate::Result;
use crate::app::models::RawFileContent;
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Fetch every listed file, skipping files whose download failed
///
/// Returned entries keep the listing order and always carry content.
pub async fn get_all_files_with_content<S>(source: &S) -> Result<Vec<RawFileContent>>
where
    S: FileSource + ?Sized,
{
    get_files_with_content(source, None).await
}

/// Fetch listed files, optionally restricted to a single filename
///
/// With a `filter`, only entries equal to it are downloaded; a filter that
/// matches nothing yields an empty result without any download.
pub async fn get_files_with_content<S>(
    source: &S,
    filter: Option<&str>,
) -> Result<Vec<RawFileContent>>
where
    S: FileSource + ?Sized,
{
    let filenames = source.get_files_list().await?;
    debug!(
        "{} listed {} files: {:?}",
        source.label(),
        filenames.len(),
        filenames
    );

    let selected: Vec<String> = match filter {
        Some(name) => filenames.into_iter().filter(|f| f == name).collect(),
        None => filenames,
    };

    // No concurrency cap: one in-flight request per file
    let downloads = selected.into_iter().map(|filename| async move {
        let content = download_or_none(source, &filename).await;
        RawFileContent { filename, content }
    });
    let results = join_all(downloads).await;

    let requested = results.len();
    let downloaded: Vec<RawFileContent> = results
        .into_iter()
        .filter(RawFileContent::has_content)
        .collect();

    if downloaded.len() < requested {
        warn!(
            "Downloaded {} of {} files; {} failed",
            downloaded.len(),
            requested,
            requested - downloaded.len()
        );
    } else {
        info!("Downloaded {} files", downloaded.len());
    }

    Ok(downloaded)
}

/// Download one file, logging and absorbing any failure
pub async fn download_or_none<S>(source: &S, filename: &str) -> Option<String>
where
    S: FileSource + ?Sized,
{
    match source.download_file(filename).await {
        Ok(content) => Some(content),
        Err(error) => {
            warn!("Error downloading file {}: {}", filename, error);
            None
        }
    }
}
