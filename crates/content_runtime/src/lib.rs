//! Reactive content cache for static text resources served alongside the site.
//!
//! [`ContentStore`] fetches resources by name through a [`content_host::ContentFetcher`], keeps
//! the latest successful content per name in an observable cache, and republishes the list of
//! loaded contents as a derived observable. [`ContentProvider`] exposes both to Leptos
//! components.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod content;
mod loader;
mod manifest;
mod runtime_context;
pub mod store;

pub use content::{ContentFiles, ContentStore};
pub use loader::{fetch_content, LoadError};
pub use manifest::{content_manifest, CONTENT_MANIFEST_JSON};
pub use runtime_context::{
    bind_observable, create_observable_signal, use_content, ContentContext, ContentProvider,
};
pub use store::{Derived, Observable, Readable, Subscription};
