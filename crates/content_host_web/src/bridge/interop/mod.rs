//! Shared transport interop for the fetch bridge.
//!
//! Routes calls to target-specific implementations while keeping one async API for the bridge.

use content_host::ContentResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(path: &str) -> Result<ContentResponse, String> {
    imp::fetch_text(path).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fetch_is_a_transport_failure() {
        let err = block_on(fetch_text("/doc1.md")).expect_err("native fetch unsupported");
        assert!(err.contains("wasm32"), "{err}");
    }
}
