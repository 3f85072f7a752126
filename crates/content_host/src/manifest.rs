//! Content manifest model shared by build-time validation and runtime wiring.

use serde::{Deserialize, Serialize};

use crate::fetch::path::ContentRoot;

/// Current supported content manifest schema version.
pub const CONTENT_MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Declares where content is served from and which resources load at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentManifest {
    /// Manifest schema version.
    pub schema_version: u32,
    /// URL prefix for every content request.
    #[serde(default)]
    pub root: ContentRoot,
    /// Resource names loaded when the app boots, in load order.
    #[serde(default)]
    pub preload: Vec<String>,
}

impl Default for ContentManifest {
    fn default() -> Self {
        Self {
            schema_version: CONTENT_MANIFEST_SCHEMA_VERSION,
            root: ContentRoot::default(),
            preload: Vec::new(),
        }
    }
}

impl ContentManifest {
    /// Parses and validates a manifest from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or [`Self::validate`] rejects it.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let manifest: Self = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Checks the schema version and that every preload name is non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != CONTENT_MANIFEST_SCHEMA_VERSION {
            return Err(format!(
                "content manifest schema mismatch: expected {CONTENT_MANIFEST_SCHEMA_VERSION} found {}",
                self.schema_version
            ));
        }
        if let Some(idx) = self.preload.iter().position(|name| name.trim().is_empty()) {
            return Err(format!("content manifest preload[{idx}] is empty"));
        }
        Ok(())
    }
}
