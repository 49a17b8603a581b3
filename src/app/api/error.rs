//! Error responses for the HTTP interface.

use crate::constants::messages;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors a request handler can end with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream URL or credential missing
    #[error("upstream API is not configured")]
    NotConfigured,

    /// The upstream file list could not be fetched
    #[error("upstream unavailable: {0}")]
    Unavailable(#[source] crate::Error),

    /// Query string could not be decoded
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Unexpected failure inside the relay
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body shared by all error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

impl ApiError {
    /// HTTP status for this error
    ///
    /// - NotConfigured: 500
    /// - InvalidQuery: 400
    /// - Unavailable: 503
    /// - Internal: 500
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotConfigured | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<crate::Error> for ApiError {
    fn from(error: crate::Error) -> Self {
        if error.is_upstream() {
            Self::Unavailable(error)
        } else {
            Self::Internal(error.to_string())
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Bodies are fixed strings; upstream detail only goes to the log
        let status = self.status_code();
        let body = match &self {
            Self::NotConfigured => ErrorBody::new(
                messages::SERVER_CONFIG_ERROR,
                messages::API_URL_NOT_CONFIGURED,
            ),
            Self::InvalidQuery(detail) => ErrorBody::new(messages::BAD_REQUEST, detail.clone()),
            Self::Unavailable(_) => {
                ErrorBody::new(messages::SERVICE_UNAVAILABLE, messages::UNABLE_TO_FETCH)
            }
            Self::Internal(_) => {
                ErrorBody::new(messages::INTERNAL_ERROR, "An unexpected error occurred")
            }
        };

        (status, Json(body)).into_response()
    }
}
