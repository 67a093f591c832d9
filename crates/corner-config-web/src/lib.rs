// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `localStorage`-backed `ConfigStore` for the blog (values stored as UTF-8 text).

use corner_app_core::config::{ConfigError, ConfigStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Store values directly under their key in the window's `localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the current window's `localStorage`.
    pub fn new() -> Result<Self, ConfigError> {
        let window =
            web_sys::window().ok_or_else(|| ConfigError::Other("no global window".into()))?;
        let storage = window
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| ConfigError::Other("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

fn storage_error(err: JsValue) -> ConfigError {
    ConfigError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl ConfigStore for LocalStorageStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match self.storage.get_item(key).map_err(storage_error)? {
            Some(value) => Ok(value.into_bytes()),
            None => Err(ConfigError::NotFound),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let text = std::str::from_utf8(data).map_err(|_| ConfigError::Encoding)?;
        self.storage.set_item(key, text).map_err(storage_error)
    }

    fn remove_raw(&self, key: &str) -> Result<(), ConfigError> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

// Storage only exists inside a browser; run with `wasm-pack test --headless`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use corner_app_core::config::ConfigService;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn values_round_trip_as_plain_text() {
        let store = LocalStorageStore::new().unwrap();
        store.save_raw("corner-test-likeCount", b"3").unwrap();
        assert_eq!(store.load_raw("corner-test-likeCount").unwrap(), b"3");
        store.remove_raw("corner-test-likeCount").unwrap();
        assert!(matches!(
            store.load_raw("corner-test-likeCount"),
            Err(ConfigError::NotFound)
        ));
    }

    #[wasm_bindgen_test]
    fn config_service_reads_bare_integers() {
        let svc = ConfigService::new(LocalStorageStore::new().unwrap());
        svc.save("corner-test-postId", &42u64).unwrap();
        let id: Option<u64> = svc.load("corner-test-postId").unwrap();
        assert_eq!(id, Some(42));
        svc.remove("corner-test-postId").unwrap();
    }
}
