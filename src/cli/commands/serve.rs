//! `serve` command: run the HTTP service

use super::shared::setup_logging;
use crate::app::api::{AppState, create_router, serve};
use crate::app::services::upstream::HttpFileSource;
use crate::cli::args::ServeArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn run_serve(args: ServeArgs, cancellation_token: CancellationToken) -> Result<()> {
    setup_logging(&args.logging);

    let mut config = Config::from_env();
    args.apply_overrides(&mut config);
    config.validate()?;

    if !config.upstream.is_configured() {
        warn!("External API URL or API key not configured; file routes will return 500");
    }

    let source = HttpFileSource::new(&config.upstream)?;
    let state = AppState::new(Arc::new(source), config.upstream.is_configured());
    let router = create_router(state);

    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Relaying {}", config.upstream.base_url);
    serve(listener, router, cancellation_token)
        .await
        .context("server error")?;

    Ok(())
}
