//! HTTP interface of the relay
//!
//! Exposes the aggregated file records and the upstream file list as JSON,
//! answers unknown routes with a JSON 404, and attaches permissive CORS
//! headers to every response.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, create_router, serve};
