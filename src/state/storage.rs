//! Persisted login hint.
//!
//! The browser keeps a single `isLoggedIn` key in `localStorage` so a page
//! reload can render the logged-in UI before `/me` answers. It is only a
//! cache of the session flag and may be stale; the in-memory flag wins once
//! a fetch has completed.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; native builds read
//! as "no hint" and writes no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// `localStorage` key holding the login hint.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Value stored under [`LOGGED_IN_KEY`] while logged in.
pub const LOGGED_IN_SENTINEL: &str = "1";

/// Minimal key-value storage used for the login hint.
pub trait HintStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// True when the stored hint equals the logged-in sentinel.
pub fn read_login_hint(storage: &dyn HintStorage) -> bool {
    storage.get(LOGGED_IN_KEY).as_deref() == Some(LOGGED_IN_SENTINEL)
}

pub fn write_login_hint(storage: &dyn HintStorage) {
    storage.set(LOGGED_IN_KEY, LOGGED_IN_SENTINEL);
}

pub fn clear_login_hint(storage: &dyn HintStorage) {
    storage.remove(LOGGED_IN_KEY);
}

/// Browser `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl HintStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HintStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}
