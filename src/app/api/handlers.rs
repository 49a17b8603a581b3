//! Request handlers

use super::error::{ApiError, ErrorBody};
use super::server::AppState;
use crate::app::models::{FileRecord, FilesList};
use crate::app::services::csv_parser::{process_files, total_lines};
use crate::app::services::upstream::{FileSource, get_files_with_content};
use crate::constants::{messages, routes};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

/// Query parameters accepted by `GET /files/data`
#[derive(Debug, Default, Deserialize)]
pub struct FilesDataQuery {
    /// Restrict the response to one file
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

/// `GET /` - service banner
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": messages::API_NAME,
        "status": messages::STATUS_RUNNING,
        "endpoints": {
            "files_data": routes::FILES_DATA,
            "files_list": routes::FILES_LIST,
        }
    }))
}

/// `GET /files/data` - parsed records for every downloadable file
pub async fn files_data(
    State(state): State<AppState>,
    query: Result<Query<FilesDataQuery>, QueryRejection>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let Query(query) = query?;
    ensure_configured(&state)?;

    let filter = query.file_name.as_deref().filter(|name| !name.is_empty());
    let files = get_files_with_content(state.source.as_ref(), filter)
        .await
        .map_err(|e| log_failure(routes::FILES_DATA, e))?;

    let records = process_files(&files);
    info!(
        "Serving {} files with {} lines",
        records.len(),
        total_lines(&records)
    );
    Ok(Json(records))
}

/// `GET /files/list` - upstream file list passed through
pub async fn files_list(State(state): State<AppState>) -> Result<Json<FilesList>, ApiError> {
    ensure_configured(&state)?;

    let files = state
        .source
        .get_files_list()
        .await
        .map_err(|e| log_failure(routes::FILES_LIST, e))?;

    Ok(Json(FilesList { files }))
}

/// Any unmatched route
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(
            messages::NOT_FOUND,
            format!("Route {} {} not found", method, uri.path()),
        )),
    )
}

fn ensure_configured(state: &AppState) -> Result<(), ApiError> {
    if state.configured {
        Ok(())
    } else {
        error!("Upstream API URL or key missing");
        Err(ApiError::NotConfigured)
    }
}

fn log_failure(context: &str, error: crate::Error) -> ApiError {
    error!("Error in {}: {}", context, error);
    error.into()
}
