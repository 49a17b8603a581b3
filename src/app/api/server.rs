//! Router construction and server lifecycle

use super::handlers;
use crate::app::services::upstream::FileSource;
use crate::constants::{cors, routes};
use crate::{Error, Result};
use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::middleware;
use axum::response::Response;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Where file lists and bodies come from
    pub source: Arc<dyn FileSource>,

    /// Whether the upstream URL and credential are present
    pub configured: bool,
}

impl AppState {
    pub fn new(source: Arc<dyn FileSource>, configured: bool) -> Self {
        Self { source, configured }
    }
}

/// Build the relay's router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root))
        .route(routes::FILES_DATA, get(handlers::files_data))
        .route(routes::FILES_LIST, get(handlers::files_list))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(middleware::map_response(add_cors_headers))
        .with_state(state)
}

async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(cors::ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(cors::ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(cors::ALLOW_METHODS),
    );
    response
}

/// Serve the router until `shutdown` is cancelled
pub async fn serve(listener: TcpListener, router: Router, shutdown: CancellationToken) -> Result<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| Error::io("Failed to read listener address", e))?;
    info!("Server running on http://{}", addr);
    info!("  GET http://{}{}", addr, routes::FILES_DATA);
    info!("  GET http://{}{}", addr, routes::FILES_LIST);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| Error::io("Server error", e))?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::upstream::tests::{MockFileSource, SAMPLE_CSV};
    use serde_json::Value;

    /// Start the router on an ephemeral port and return its base URL
    async fn spawn_app(source: MockFileSource, configured: bool) -> (String, CancellationToken) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let router = create_router(AppState::new(Arc::new(source), configured));
        let token = CancellationToken::new();

        let shutdown = token.clone();
        tokio::spawn(async move { serve(listener, router, shutdown).await });
        (base, token)
    }

    #[tokio::test]
    async fn test_root_reports_running() {
        let (base, token) = spawn_app(MockFileSource::new(), true).await;

        let response = reqwest::get(format!("{}/", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["endpoints"]["files_data"], "/files/data");

        token.cancel();
    }

    #[tokio::test]
    async fn test_files_data_returns_records() {
        let source = MockFileSource::new()
            .with_file("f1.csv", SAMPLE_CSV)
            .with_failing_file("f2.csv");
        let (base, token) = spawn_app(source, true).await;

        let response = reqwest::get(format!("{}/files/data", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .contains("application/json")
        );

        let json: Value = response.json().await.unwrap();
        let files = json.as_array().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0]["file"], "f1.csv");
        assert_eq!(files[0]["lines"][0]["text"], "RgTya");
        assert!(files[0]["lines"][0]["number"].is_i64());

        token.cancel();
    }

    #[tokio::test]
    async fn test_files_data_file_name_filter() {
        let source = MockFileSource::new()
            .with_file("f1.csv", SAMPLE_CSV)
            .with_file("f3.csv", "file,text,number,hex");
        let (base, token) = spawn_app(source, true).await;

        let json: Value = reqwest::get(format!("{}/files/data?fileName=f3.csv", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let files = json.as_array().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0]["file"], "f3.csv");
        assert_eq!(files[0]["lines"].as_array().unwrap().len(), 0);

        token.cancel();
    }

    #[tokio::test]
    async fn test_files_list() {
        let source = MockFileSource::new()
            .with_file("a.csv", "a")
            .with_failing_file("b.csv");
        let (base, token) = spawn_app(source, true).await;

        let json: Value = reqwest::get(format!("{}/files/list", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(json["files"], serde_json::json!(["a.csv", "b.csv"]));

        token.cancel();
    }

    #[tokio::test]
    async fn test_list_failure_is_service_unavailable() {
        let source = MockFileSource::new().with_list_failure(500);
        let (base, token) = spawn_app(source, true).await;

        for path in ["/files/data", "/files/list"] {
            let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
            assert_eq!(response.status().as_u16(), 503);
            let json: Value = response.json().await.unwrap();
            assert_eq!(json["error"], "Service temporarily unavailable");
        }

        token.cancel();
    }

    #[tokio::test]
    async fn test_missing_configuration_is_server_error() {
        let (base, token) = spawn_app(MockFileSource::new(), false).await;

        let response = reqwest::get(format!("{}/files/data", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 500);
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["error"], "Server configuration error");

        token.cancel();
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (base, token) = spawn_app(MockFileSource::new(), true).await;

        let response = reqwest::get(format!("{}/unknown", base)).await.unwrap();
        assert_eq!(response.status().as_u16(), 404);
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["message"], "Route GET /unknown not found");

        token.cancel();
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_route_is_json_404() {
        let (base, token) = spawn_app(MockFileSource::new(), true).await;

        let response = reqwest::Client::new()
            .post(format!("{}/files/data", base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .unwrap(),
            "*"
        );
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "Route POST /files/data not found");

        token.cancel();
    }

    #[tokio::test]
    async fn test_duplicate_file_name_is_json_400() {
        let source = MockFileSource::new().with_file("a.csv", SAMPLE_CSV);
        let (base, token) = spawn_app(source, true).await;

        let response = reqwest::get(format!("{}/files/data?fileName=a.csv&fileName=b.csv", base))
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        assert!(
            response
                .headers()
                .contains_key("access-control-allow-origin")
        );
        let json: Value = response.json().await.unwrap();
        assert_eq!(json["error"], "Bad Request");
        assert!(json["message"].as_str().unwrap().contains("fileName"));

        token.cancel();
    }
}
