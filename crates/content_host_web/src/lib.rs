//! Browser (`wasm32`) implementations of [`content_host`] service contracts.
//!
//! Transport calls go through `bridge::interop`, which routes to `window.fetch` on wasm32 and to
//! an always-failing stub elsewhere so native builds and tests link without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the concrete fetcher factory for runtime wiring.
pub mod adapters;
mod bridge;
pub mod fetch;

pub use adapters::{
    content_fetcher, host_strategy_name, selected_host_strategy, ContentFetcherAdapter,
    HostStrategy,
};
pub use fetch::WebContentFetcher;
