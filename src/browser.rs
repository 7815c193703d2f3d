//! Browser Storage Medium
//!
//! `window.localStorage` behind the core `StorageMedium` trait.

use tableau_core::{MediumError, StorageMedium};
use wasm_bindgen::{JsCast, JsValue};

/// DOMException names browsers use for a full storage area
const QUOTA_ERRORS: &[&str] = &["QuotaExceededError", "NS_ERROR_DOM_QUOTA_REACHED"];

/// Handle to the page's local storage, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserMedium;

fn local_storage() -> Result<web_sys::Storage, MediumError> {
    let window = web_sys::window().ok_or_else(|| MediumError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| MediumError::Unavailable("localStorage disabled".into()))
}

fn js_error(err: JsValue) -> MediumError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if QUOTA_ERRORS.contains(&ex.name().as_str()) => MediumError::QuotaExceeded,
        Some(ex) => MediumError::Unavailable(format!("{}: {}", ex.name(), ex.message())),
        None => MediumError::Unavailable(format!("{:?}", err)),
    }
}

impl StorageMedium for BrowserMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
