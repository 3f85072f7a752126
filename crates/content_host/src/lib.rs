//! Typed host contracts for fetching static text content.
//!
//! This crate is the API-first boundary between the content runtime and the transport that
//! serves content files. It exposes the [`ContentFetcher`] service trait, request-path helpers,
//! the build-time content manifest model, and in-memory adapters for tests. Concrete browser
//! adapters live in `content_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fetch;
pub mod manifest;

pub use fetch::path::{content_request_path, normalize_resource_name, ContentRoot};
pub use fetch::service::{
    ContentFetchFuture, ContentFetcher, ContentResponse, MemoryContentFetcher, NoopContentFetcher,
};
pub use manifest::{ContentManifest, CONTENT_MANIFEST_SCHEMA_VERSION};
