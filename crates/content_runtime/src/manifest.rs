//! Build-time content manifest access.

use content_host::ContentManifest;
use leptos::logging;

include!(concat!(env!("OUT_DIR"), "/content_manifest_generated.rs"));

/// Returns the manifest compiled from `content.manifest.toml`.
///
/// Falls back to the default manifest (site root, nothing preloaded) if the embedded JSON is
/// rejected, which the build script normally prevents.
pub fn content_manifest() -> ContentManifest {
    ContentManifest::from_json(CONTENT_MANIFEST_JSON).unwrap_or_else(|err| {
        logging::warn!("content manifest load failed: {err}");
        ContentManifest::default()
    })
}
