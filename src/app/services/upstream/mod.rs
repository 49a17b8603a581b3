//! Upstream file API access
//!
//! Fetches the file list and file bodies from the remote API that the relay
//! fronts. The [`FileSource`] trait is the seam between the orchestration and
//! the transport, so the fan-out logic can be exercised without a network.
//!
//! ## Architecture
//!
//! - [`source`] - The [`FileSource`] trait
//! - [`http`] - [`HttpFileSource`], the authenticated `reqwest` implementation
//! - [`orchestrator`] - List-then-download fan-out with per-file failure isolation

pub mod http;
pub mod orchestrator;
pub mod source;

#[cfg(test)]
pub mod tests;

pub use http::HttpFileSource;
pub use orchestrator::{download_or_none, get_all_files_with_content, get_files_with_content};
pub use source::FileSource;
