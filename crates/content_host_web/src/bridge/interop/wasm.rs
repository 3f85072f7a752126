use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error)
}

pub async fn fetch_text(path: &str) -> Result<ContentResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let response: web_sys::Response = await_promise(window.fetch_with_str(path))
        .await?
        .dyn_into()
        .map_err(js_error)?;

    let status = response.status();
    if !response.ok() {
        return Ok(ContentResponse::status(status));
    }

    let body = await_promise(response.text().map_err(js_error)?)
        .await?
        .as_string()
        .ok_or_else(|| format!("response body for `{path}` is not text"))?;
    Ok(ContentResponse { status, body })
}
