//! `fetch`-backed asset fetcher.

use platform_host::{AssetFetchError, AssetFetchFuture, AssetFetcher};

#[derive(Debug, Clone, Copy, Default)]
/// Browser asset fetcher backed by `window.fetch`.
pub struct WebAssetFetcher;

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, AssetFetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use crate::interop::{js_error_to_string, window};

    let transport = |err| AssetFetchError::Transport(js_error_to_string(err));
    let window = window().map_err(AssetFetchError::Transport)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(transport)?
        .dyn_into::<web_sys::Response>()
        .map_err(transport)?;
    if !response.ok() {
        return Err(AssetFetchError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    body.as_string()
        .ok_or_else(|| AssetFetchError::Transport(format!("response body of {url} is not text")))
}

impl AssetFetcher for WebAssetFetcher {
    fn fetch_text<'a>(
        &'a self,
        url: &'a str,
    ) -> AssetFetchFuture<'a, Result<String, AssetFetchError>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(fetch_text(url))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async move {
                Err(AssetFetchError::Transport(format!(
                    "fetch is only available when compiled for wasm32: {url}"
                )))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_asset_fetcher_non_wasm_parity() {
        let err = block_on(WebAssetFetcher.fetch_text("/icons/star.svg")).expect_err("unsupported");
        assert!(matches!(err, AssetFetchError::Transport(_)));
    }
}
