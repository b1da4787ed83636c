use report_core::load::decode_json;
use report_core::{Result, SiteError};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

async fn fetch_response(path: &str) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| SiteError::network(path, "window not available"))?;
    let value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| SiteError::network(path, format!("{e:?}")))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| SiteError::network(path, "fetch did not yield a Response"))?;
    if !response.ok() {
        return Err(SiteError::Status {
            path: path.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

pub async fn fetch_text(path: &str) -> Result<String> {
    let response = fetch_response(path).await?;
    let body = response
        .text()
        .map_err(|e| SiteError::decode(path, format!("{e:?}")))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| SiteError::decode(path, format!("{e:?}")))?;
    body.as_string()
        .ok_or_else(|| SiteError::decode(path, "body is not text"))
}

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let body = fetch_text(path).await?;
    decode_json(path, &body)
}
