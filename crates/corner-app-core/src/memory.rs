// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory `ConfigStore` used by native tests and headless runs.

use crate::config::{ConfigError, ConfigStore};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Keeps values in a map; can be told to reject writes.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
    fail_writes: Cell<bool>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with text values.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into().into_bytes())),
        );
        store
    }

    /// When set, every `save_raw`/`remove_raw` fails with `ConfigError::Storage`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Stored value for `key` as text, if present and UTF-8.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(key)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    fn check_writable(&self) -> Result<(), ConfigError> {
        if self.fail_writes.get() {
            return Err(ConfigError::Storage("writes disabled".into()));
        }
        Ok(())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        self.entries
            .borrow()
            .get(key)
            .cloned()
            .ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), ConfigError> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
