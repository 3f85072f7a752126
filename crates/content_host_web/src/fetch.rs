//! `window.fetch`-backed content fetcher.

use content_host::{ContentFetchFuture, ContentFetcher, ContentResponse};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser content fetcher backed by the Fetch API.
pub struct WebContentFetcher;

impl ContentFetcher for WebContentFetcher {
    fn get_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentFetchFuture<'a, Result<ContentResponse, String>> {
        Box::pin(async move { bridge::fetch_text(path).await })
    }
}
