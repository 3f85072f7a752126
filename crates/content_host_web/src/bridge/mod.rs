//! Browser capability bridge for `content_host_web` adapters.

mod interop;

use content_host::ContentResponse;

pub async fn fetch_text(path: &str) -> Result<ContentResponse, String> {
    interop::fetch_text(path).await
}
