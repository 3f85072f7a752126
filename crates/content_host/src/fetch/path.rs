//! Request-path construction for content resources.

use serde::{Deserialize, Serialize};

/// URL path prefix under which content resources are served.
///
/// The root is always stored normalized: a leading `/`, no trailing `/` (except for the bare
/// site root), and no empty, `.` or `..` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ContentRoot(String);

impl ContentRoot {
    /// Builds a normalized root from an arbitrary path prefix.
    pub fn new(prefix: &str) -> Self {
        let segments = normalize_resource_name(prefix);
        if segments.is_empty() {
            Self("/".to_string())
        } else {
            Self(format!("/{segments}"))
        }
    }

    /// Returns the normalized root path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the bare site root `/`.
    pub fn is_site_root(&self) -> bool {
        self.0 == "/"
    }
}

impl Default for ContentRoot {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl From<String> for ContentRoot {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<ContentRoot> for String {
    fn from(value: ContentRoot) -> Self {
        value.0
    }
}

/// Normalizes a resource name into a relative, slash-separated path.
///
/// Backslashes become `/`, empty and `.` segments are dropped, and `..` pops the previous
/// segment without ever climbing above the content root.
pub fn normalize_resource_name(name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let replaced = name.trim().replace('\\', "/");
    for segment in replaced.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Returns the absolute request path for `name` under `root`.
///
/// With the default root this is `/{name}`.
pub fn content_request_path(root: &ContentRoot, name: &str) -> String {
    let relative = normalize_resource_name(name);
    if root.is_site_root() {
        format!("/{relative}")
    } else {
        format!("{}/{relative}", root.as_str())
    }
}
