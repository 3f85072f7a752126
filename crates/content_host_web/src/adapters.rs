use content_host::{ContentFetchFuture, ContentFetcher, ContentResponse, NoopContentFetcher};

use crate::WebContentFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `content_host_web` adapters.
pub enum HostStrategy {
    /// Browser Fetch API transport.
    Browser,
    /// Placeholder transport that fails every request; used for headless builds.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete transport behind [`ContentFetcher`].
#[derive(Debug, Clone, Copy)]
pub enum ContentFetcherAdapter {
    /// Browser Fetch API transport.
    Browser(WebContentFetcher),
    /// No-op fallback for headless builds.
    Stub(NoopContentFetcher),
}

impl ContentFetcher for ContentFetcherAdapter {
    fn get_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentFetchFuture<'a, Result<ContentResponse, String>> {
        match self {
            Self::Browser(fetcher) => fetcher.get_text(path),
            Self::Stub(fetcher) => fetcher.get_text(path),
        }
    }
}

/// Builds the content fetcher for the compile-time selected host strategy.
pub fn content_fetcher() -> ContentFetcherAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ContentFetcherAdapter::Browser(WebContentFetcher),
        HostStrategy::Stub => ContentFetcherAdapter::Stub(NoopContentFetcher),
    }
}
