//! Command implementations for the CSV relay CLI
//!
//! Each command lives in its own module; [`run`] dispatches to them and turns
//! a CTRL+C during a one-shot command into an interrupted error. The `serve`
//! command instead drains in-flight requests and exits cleanly.

pub mod fetch;
pub mod list;
pub mod parse;
pub mod serve;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;
use tokio_util::sync::CancellationToken;

/// Main command runner
///
/// - `serve`: HTTP service until cancelled
/// - `fetch`: one-shot fetch, parse and print
/// - `list`: print the upstream file list
/// - `parse`: parse local CSV files
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };

    match command {
        Commands::Serve(serve_args) => serve::run_serve(serve_args, cancellation_token).await,
        Commands::Fetch(fetch_args) => {
            until_cancelled(fetch::run_fetch(fetch_args), cancellation_token).await
        }
        Commands::List(list_args) => {
            until_cancelled(list::run_list(list_args), cancellation_token).await
        }
        Commands::Parse(parse_args) => {
            until_cancelled(parse::run_parse(parse_args), cancellation_token).await
        }
    }
}

async fn until_cancelled<F>(command: F, cancellation_token: CancellationToken) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    tokio::select! {
        result = command => result,
        _ = cancellation_token.cancelled() => Err(crate::Error::processing_interrupted(
            "Processing interrupted by user",
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancelled_command_reports_interruption() {
        let token = CancellationToken::new();
        token.cancel();

        let result = until_cancelled(std::future::pending(), token).await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<crate::Error>(),
            Some(crate::Error::ProcessingInterrupted { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_command_is_noop() {
        let args = Args { command: None };
        assert!(run(args, CancellationToken::new()).await.is_ok());
    }
}
