use super::*;

fn unsupported() -> String {
    "Browser fetch API is only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_path: &str) -> Result<ContentResponse, String> {
    Err(unsupported())
}
