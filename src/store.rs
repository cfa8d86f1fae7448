//! Durable preference storage.
//!
//! Behaviors never touch `localStorage` directly; they go through
//! [`PreferenceStore`] so the theme logic runs the same against the browser
//! store and the in-memory store used by tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use crate::theme::Theme;

/// A write to the durable store failed.
#[derive(Debug, thiserror::Error)]
#[error("preference store write failed: {0}")]
pub struct StoreError(pub String);

/// Per-origin string key-value storage.
pub trait PreferenceStore {
    /// Read `key`. Unreadable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Read the stored theme. Values other than `light` / `dark` read as unset.
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> Option<Theme> {
    store.get(key).as_deref().and_then(Theme::parse)
}

/// Persist `theme` under `key`.
///
/// # Errors
///
/// Propagates the store's [`StoreError`].
pub fn save_theme(store: &mut impl PreferenceStore, key: &str, theme: Theme) -> Result<(), StoreError> {
    store.set(key, theme.as_str())
}

/// In-memory store. Used natively and as the fallback when the browser
/// exposes no `localStorage`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like storage in some private modes.
    #[must_use]
    pub fn read_only() -> Self {
        Self { entries: HashMap::new(), read_only: true }
    }

    /// Seed an entry without going through [`PreferenceStore::set`].
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError(format!("{key} is read-only")));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the window's local storage, if the browser exposes one.
    pub fn open(window: &web_sys::Window) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                log::debug!("local storage unavailable: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("local storage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError(format!("{err:?}")))
    }
}
