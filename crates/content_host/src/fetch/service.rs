//! Content fetch service contracts and adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ContentFetcher`] async methods.
pub type ContentFetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Completed HTTP response for a content request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResponse {
    /// HTTP status code.
    pub status: u16,
    /// Full response body decoded as text.
    pub body: String,
}

impl ContentResponse {
    /// Builds a `200 OK` response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Builds a response with `status` and an empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Returns whether the status lies in the `2xx` success range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

/// Host service that issues HTTP `GET` requests for static text content.
pub trait ContentFetcher {
    /// Fetches `path` and returns the response for any HTTP status.
    ///
    /// `Err` carries transport-level failure detail (DNS, connection reset, unsupported host);
    /// non-success statuses are reported through [`ContentResponse::status`] instead.
    fn get_text<'a>(&'a self, path: &'a str)
        -> ContentFetchFuture<'a, Result<ContentResponse, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fetcher for unsupported targets; every request fails at the transport level.
pub struct NoopContentFetcher;

impl ContentFetcher for NoopContentFetcher {
    fn get_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentFetchFuture<'a, Result<ContentResponse, String>> {
        Box::pin(async move { Err(format!("no content transport available for `{path}`")) })
    }
}

#[derive(Debug, Default)]
struct MemoryRoutes {
    routes: HashMap<String, Result<ContentResponse, String>>,
    requests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// Scripted in-memory fetcher keyed by request path.
///
/// Paths without a scripted route answer `404`. Every request is recorded in call order.
pub struct MemoryContentFetcher {
    inner: Rc<RefCell<MemoryRoutes>>,
}

impl MemoryContentFetcher {
    /// Serves `body` with status `200` for `path`.
    pub fn respond(&self, path: impl Into<String>, body: impl Into<String>) {
        self.respond_with(path, ContentResponse::ok(body));
    }

    /// Serves a fixed response for `path`.
    pub fn respond_with(&self, path: impl Into<String>, response: ContentResponse) {
        self.inner
            .borrow_mut()
            .routes
            .insert(path.into(), Ok(response));
    }

    /// Fails every request for `path` with a transport error carrying `detail`.
    pub fn fail(&self, path: impl Into<String>, detail: impl Into<String>) {
        self.inner
            .borrow_mut()
            .routes
            .insert(path.into(), Err(detail.into()));
    }

    /// Returns every requested path in call order.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }
}

impl ContentFetcher for MemoryContentFetcher {
    fn get_text<'a>(
        &'a self,
        path: &'a str,
    ) -> ContentFetchFuture<'a, Result<ContentResponse, String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(path.to_string());
            inner
                .routes
                .get(path)
                .cloned()
                .unwrap_or_else(|| Ok(ContentResponse::status(404)))
        })
    }
}
