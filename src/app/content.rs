use std::sync::Arc;

use leptos::prelude::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::PROFILE_PATH;
use crate::profile::{parse_profile, ContentDocument, ProfileError};

fn fetch_err(err: JsValue) -> ProfileError {
    ProfileError::Fetch(format!("{err:?}"))
}

async fn fetch_profile() -> Result<ContentDocument, ProfileError> {
    let res = JsFuture::from(window().fetch_with_str(PROFILE_PATH))
        .await
        .map_err(fetch_err)?;
    let res: Response = res.dyn_into().map_err(fetch_err)?;
    if !res.ok() {
        return Err(ProfileError::Fetch(format!(
            "{PROFILE_PATH} returned HTTP {}",
            res.status()
        )));
    }
    let body = JsFuture::from(res.text().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    let body = body
        .as_string()
        .ok_or_else(|| ProfileError::Parse("response body is not text".to_string()))?;
    parse_profile(&body)
}

/// Loads the content document once. Failures are logged and left for the
/// caller to keep showing the loading state.
pub async fn load_profile() -> Result<Arc<ContentDocument>, ProfileError> {
    fetch_profile()
        .await
        .map(Arc::new)
        .inspect_err(|e| log::error!("Data load failed: {e}"))
}
