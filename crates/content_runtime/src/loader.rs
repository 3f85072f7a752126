//! Fetch-and-store loader for content resources.
//!
//! Failures never reach the caller: they are logged and the cache is left as it was.

use content_host::{content_request_path, ContentFetcher, ContentRoot};
use futures::future::join_all;
use leptos::{logging, spawn_local};
use thiserror::Error;

use crate::content::ContentStore;

/// Reasons a single content load did not produce content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource name was empty or whitespace.
    #[error("content resource name is empty")]
    EmptyName,
    /// The server answered with a non-`2xx` status.
    #[error("failed to load `{name}`: HTTP {status}")]
    Status {
        /// Requested resource name.
        name: String,
        /// HTTP status returned by the server.
        status: u16,
    },
    /// The request never produced an HTTP response.
    #[error("error loading `{name}`: {detail}")]
    Transport {
        /// Requested resource name.
        name: String,
        /// Transport failure detail.
        detail: String,
    },
}

/// Fetches `name` under `root` and returns its body when the response is `2xx`.
///
/// # Errors
///
/// Returns [`LoadError::EmptyName`] before any request for blank names,
/// [`LoadError::Status`] for non-success responses, and [`LoadError::Transport`] when the
/// fetcher fails.
pub async fn fetch_content(
    fetcher: &dyn ContentFetcher,
    root: &ContentRoot,
    name: &str,
) -> Result<String, LoadError> {
    if name.trim().is_empty() {
        return Err(LoadError::EmptyName);
    }
    let path = content_request_path(root, name);
    let response = fetcher
        .get_text(&path)
        .await
        .map_err(|detail| LoadError::Transport {
            name: name.to_string(),
            detail,
        })?;
    if !response.is_success() {
        return Err(LoadError::Status {
            name: name.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

impl ContentStore {
    /// Fetches `name` and stores its content, overwriting any earlier content for `name`.
    ///
    /// Surrounding whitespace is stripped once, so the cache key and the request path always
    /// name the same resource. On failure the cache is untouched and a warning naming the
    /// resource is logged.
    pub async fn load(&self, name: &str) {
        let name = name.trim();
        match fetch_content(self.fetcher.as_ref(), &self.root, name).await {
            Ok(content) => self.files.update(|files| files.with_entry(name, content)),
            Err(err) => logging::warn!("content load failed: {err}"),
        }
    }

    /// Starts [`Self::load`] on the event loop without waiting for it.
    pub fn spawn_load(&self, name: impl Into<String>) {
        let store = self.clone();
        let name = name.into();
        spawn_local(async move { store.load(&name).await });
    }

    /// Loads every name concurrently; each load succeeds or fails on its own.
    pub async fn load_all<I>(&self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let names: Vec<I::Item> = names.into_iter().collect();
        join_all(names.iter().map(|name| self.load(name.as_ref()))).await;
    }

    /// Starts one [`Self::spawn_load`] per name.
    pub fn spawn_load_all<I>(&self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.spawn_load(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use content_host::{ContentFetchFuture, ContentResponse, MemoryContentFetcher};
    use futures::{
        channel::oneshot,
        executor::{block_on, LocalPool},
        task::LocalSpawnExt,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{content::ContentFiles, store::Readable};

    /// Fetcher whose responses are released by hand, one gate per request in call order.
    #[derive(Default)]
    struct GatedFetcher {
        gates: RefCell<VecDeque<oneshot::Receiver<String>>>,
    }

    impl GatedFetcher {
        fn gate(&self) -> oneshot::Sender<String> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push_back(rx);
            tx
        }
    }

    impl ContentFetcher for GatedFetcher {
        fn get_text<'a>(
            &'a self,
            _path: &'a str,
        ) -> ContentFetchFuture<'a, Result<ContentResponse, String>> {
            let gate = self.gates.borrow_mut().pop_front();
            Box::pin(async move {
                let gate = gate.ok_or_else(|| "no gate scripted".to_string())?;
                gate.await
                    .map(ContentResponse::ok)
                    .map_err(|_| "gate dropped".to_string())
            })
        }
    }

    fn store_with(fetcher: &MemoryContentFetcher) -> ContentStore {
        ContentStore::new(fetcher.clone())
    }

    #[test]
    fn successful_load_fills_cache_and_view() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/doc1.md", "# Hello");
        let store = store_with(&fetcher);

        block_on(store.load("doc1.md"));

        assert_eq!(
            store.files().get(),
            [("doc1.md", "# Hello")].into_iter().collect::<ContentFiles>()
        );
        assert_eq!(store.responses().get(), vec!["# Hello"]);
        assert_eq!(fetcher.requests(), vec!["/doc1.md"]);
    }

    #[test]
    fn not_found_leaves_cache_unchanged() {
        let fetcher = MemoryContentFetcher::default();
        let store = store_with(&fetcher);
        let notifications = Rc::new(RefCell::new(0));
        let _subscription = {
            let notifications = Rc::clone(&notifications);
            store
                .responses()
                .subscribe(move |_: &Vec<String>| *notifications.borrow_mut() += 1)
        };

        block_on(store.load("missing.md"));

        assert!(store.files().get().is_empty());
        assert!(store.responses().get().is_empty());
        assert_eq!(*notifications.borrow(), 1);
    }

    #[test]
    fn two_loads_keep_insertion_order() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        fetcher.respond("/b.md", "B");
        let store = store_with(&fetcher);

        block_on(store.load("a.md"));
        block_on(store.load("b.md"));

        assert_eq!(store.responses().get(), vec!["A", "B"]);
    }

    #[test]
    fn repeated_load_keeps_one_entry_with_latest_content() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "first");
        let store = store_with(&fetcher);

        block_on(store.load("a.md"));
        fetcher.respond("/a.md", "second");
        block_on(store.load("a.md"));

        assert_eq!(store.files().with(ContentFiles::len), 1);
        assert_eq!(store.content("a.md").as_deref(), Some("second"));
        assert_eq!(fetcher.requests(), vec!["/a.md", "/a.md"]);
    }

    #[test]
    fn concurrent_loads_of_one_name_keep_the_last_completion() {
        let fetcher = GatedFetcher::default();
        let first = fetcher.gate();
        let second = fetcher.gate();
        let store = ContentStore::new(fetcher);

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let store = store.clone();
            spawner
                .spawn_local(async move { store.load("a.md").await })
                .expect("spawn load");
        }
        pool.run_until_stalled();
        assert!(store.files().get().is_empty());

        second
            .send("second-issued".to_string())
            .expect("release second");
        pool.run_until_stalled();
        assert_eq!(store.content("a.md").as_deref(), Some("second-issued"));

        first.send("first-issued".to_string()).expect("release first");
        pool.run();

        assert_eq!(store.content("a.md").as_deref(), Some("first-issued"));
        assert_eq!(store.files().with(ContentFiles::len), 1);
    }

    #[test]
    fn spawn_load_stores_success_and_skips_failure() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        fetcher.fail("/x.md", "connection refused");
        let store = store_with(&fetcher);

        store.spawn_load("a.md");
        store.spawn_load("x.md");

        assert_eq!(
            store.files().get(),
            [("a.md", "A")].into_iter().collect::<ContentFiles>()
        );
        assert_eq!(fetcher.requests(), vec!["/a.md", "/x.md"]);
    }

    #[test]
    fn spawn_load_all_starts_one_load_per_name() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        fetcher.respond("/c.md", "C");
        let store = store_with(&fetcher);

        store.spawn_load_all(["a.md", "b.md", "c.md"]);

        assert_eq!(store.responses().get(), vec!["A", "C"]);
        assert!(!store.files().with(|files| files.contains("b.md")));
        assert_eq!(fetcher.requests(), vec!["/a.md", "/b.md", "/c.md"]);
    }

    #[test]
    fn surrounding_whitespace_is_stripped_from_key_and_path_alike() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        let store = store_with(&fetcher);

        block_on(store.load("  a.md "));

        assert_eq!(store.files().get().names().collect::<Vec<_>>(), vec!["a.md"]);
        assert_eq!(fetcher.requests(), vec!["/a.md"]);
    }

    #[test]
    fn failed_reload_keeps_previous_content() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        let store = store_with(&fetcher);
        block_on(store.load("a.md"));

        fetcher.respond_with("/a.md", ContentResponse::status(500));
        block_on(store.load("a.md"));
        fetcher.fail("/a.md", "connection reset");
        block_on(store.load("a.md"));

        assert_eq!(store.content("a.md").as_deref(), Some("A"));
        assert_eq!(store.responses().get(), vec!["A"]);
    }

    #[test]
    fn transport_error_is_swallowed() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.fail("/x.md", "connection refused");
        let store = store_with(&fetcher);

        block_on(store.load("x.md"));

        assert!(store.files().get().is_empty());
    }

    #[test]
    fn late_subscriber_sees_accumulated_cache() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        fetcher.respond("/b.md", "B");
        let store = store_with(&fetcher);
        block_on(store.load("a.md"));
        block_on(store.load("b.md"));

        let first = Rc::new(RefCell::new(None));
        let _subscription = {
            let first = Rc::clone(&first);
            store.files().subscribe(move |files: &ContentFiles| {
                first.borrow_mut().get_or_insert_with(|| files.clone());
            })
        };

        let seen = first.borrow().clone().expect("immediate delivery");
        assert_eq!(seen.names().collect::<Vec<_>>(), vec!["a.md", "b.md"]);
    }

    #[test]
    fn load_all_loads_distinct_names_independently() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/a.md", "A");
        fetcher.respond("/c.md", "C");
        let store = store_with(&fetcher);

        block_on(store.load_all(["a.md", "b.md", "c.md"]));

        assert_eq!(store.files().with(ContentFiles::len), 2);
        assert_eq!(store.responses().get(), vec!["A", "C"]);
        assert_eq!(fetcher.requests(), vec!["/a.md", "/b.md", "/c.md"]);
    }

    #[test]
    fn load_under_nested_root_requests_prefixed_path() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond("/content/doc1.md", "# Hello");
        let store = ContentStore::with_root(fetcher.clone(), ContentRoot::new("/content/"));

        block_on(store.load("doc1.md"));

        assert_eq!(store.content("doc1.md").as_deref(), Some("# Hello"));
    }

    #[test]
    fn fetch_content_classifies_failures() {
        let fetcher = MemoryContentFetcher::default();
        fetcher.respond_with("/gone.md", ContentResponse::status(410));
        fetcher.fail("/x.md", "dns lookup failed");
        let root = ContentRoot::default();

        assert_eq!(
            block_on(fetch_content(&fetcher, &root, "  ")),
            Err(LoadError::EmptyName)
        );
        assert_eq!(
            block_on(fetch_content(&fetcher, &root, "gone.md")),
            Err(LoadError::Status {
                name: "gone.md".to_string(),
                status: 410,
            })
        );
        let err = block_on(fetch_content(&fetcher, &root, "x.md")).expect_err("transport");
        assert_eq!(err.to_string(), "error loading `x.md`: dns lookup failed");
        assert_eq!(fetcher.requests(), vec!["/gone.md", "/x.md"]);
    }

    #[test]
    fn status_error_message_names_the_resource() {
        let err = LoadError::Status {
            name: "missing.md".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "failed to load `missing.md`: HTTP 404");
    }
}
