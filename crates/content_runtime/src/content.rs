//! Content cache and its derived view of loaded documents.

use std::rc::Rc;

use content_host::{ContentFetcher, ContentManifest, ContentRoot};

use crate::store::{Derived, Observable, Readable};

/// Loaded content keyed by resource name, in first-load order.
///
/// Reinserting an existing name replaces its content without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFiles {
    entries: Vec<(String, String)>,
}

impl ContentFiles {
    /// Inserts or overwrites `name`.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = content,
            None => self.entries.push((name, content)),
        }
    }

    /// Returns a copy with `name` mapped to `content`.
    pub fn with_entry(&self, name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.insert(name, content);
        next
    }

    /// Returns the content loaded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, content)| content.as_str())
    }

    /// Returns whether `name` has been loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of loaded resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has loaded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loaded resource names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Loaded contents in order.
    pub fn contents(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(_, content)| content.clone())
            .collect()
    }

    /// Iterates `(name, content)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for ContentFiles {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        let mut files = Self::default();
        for (name, content) in iter {
            files.insert(name, content);
        }
        files
    }
}

/// Content cache, its derived list of contents, and the fetcher that fills them.
///
/// Handles are cheap to clone and share state. Construct one per page and hand it to the UI
/// layer (see [`crate::ContentProvider`]).
#[derive(Clone)]
pub struct ContentStore {
    pub(crate) files: Observable<ContentFiles>,
    responses: Derived<Vec<String>>,
    pub(crate) root: ContentRoot,
    pub(crate) fetcher: Rc<dyn ContentFetcher>,
}

impl ContentStore {
    /// Creates an empty store that fetches `/{name}` through `fetcher`.
    pub fn new(fetcher: impl ContentFetcher + 'static) -> Self {
        Self::with_root(fetcher, ContentRoot::default())
    }

    /// Creates an empty store that fetches resources under `root`.
    pub fn with_root(fetcher: impl ContentFetcher + 'static, root: ContentRoot) -> Self {
        let files = Observable::new(ContentFiles::default());
        let responses = Derived::new(&files, ContentFiles::contents);
        Self {
            files,
            responses,
            root,
            fetcher: Rc::new(fetcher),
        }
    }

    /// Creates an empty store rooted where `manifest` says content is served.
    pub fn from_manifest(fetcher: impl ContentFetcher + 'static, manifest: &ContentManifest) -> Self {
        Self::with_root(fetcher, manifest.root.clone())
    }

    /// The content cache.
    pub fn files(&self) -> &Observable<ContentFiles> {
        &self.files
    }

    /// Every loaded content, recomputed whenever the cache changes.
    pub fn responses(&self) -> &Derived<Vec<String>> {
        &self.responses
    }

    /// URL prefix for content requests.
    pub fn root(&self) -> &ContentRoot {
        &self.root
    }

    /// Returns the cached content for `name`.
    pub fn content(&self, name: &str) -> Option<String> {
        self.files.with(|files| files.get(name).map(str::to_string))
    }
}
