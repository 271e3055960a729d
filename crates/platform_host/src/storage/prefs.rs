//! Lightweight preference storage contracts and adapters.
//!
//! Preferences are stored as raw text per key. The contract is synchronous because the backing
//! browser API (`localStorage`) is synchronous, and the theme bootstrap must read its value
//! before the first paint.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Preference key holding the persisted theme token (`"light"` or `"dark"`).
pub const THEME_PREFS_KEY: &str = "theme";

/// Host service for lightweight preference values stored as text per key.
pub trait PrefsStore {
    /// Loads the raw text stored for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves raw text for a preference key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the write.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String>;

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the delete.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can keep one handle while the code under test
/// owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::default();
        store.inner.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Returns the raw value for `key` without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a JSON preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes a value as JSON and saves it through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct ShowcasePrefs {
        active_story: String,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref(THEME_PREFS_KEY, "dark").expect("save");
        assert_eq!(
            store_obj.load_pref(THEME_PREFS_KEY).expect("load"),
            Some("dark".to_string())
        );
        store_obj.delete_pref(THEME_PREFS_KEY).expect("delete");
        assert_eq!(store_obj.load_pref(THEME_PREFS_KEY).expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_state() {
        let store = MemoryPrefsStore::with_entries([(THEME_PREFS_KEY, "light")]);
        let other = store.clone();

        other.save_pref(THEME_PREFS_KEY, "dark").expect("save");
        assert_eq!(store.raw(THEME_PREFS_KEY), Some("dark".to_string()));
    }

    #[test]
    fn typed_pref_helpers_round_trip() {
        let store = MemoryPrefsStore::default();
        save_pref_with(
            &store,
            "showcase",
            &ShowcasePrefs {
                active_story: "autocomplete".to_string(),
            },
        )
        .expect("save typed pref");

        let loaded: Option<ShowcasePrefs> =
            load_pref_with(&store, "showcase").expect("load typed pref");
        assert_eq!(
            loaded,
            Some(ShowcasePrefs {
                active_story: "autocomplete".to_string()
            })
        );
    }

    #[test]
    fn typed_pref_helpers_report_corrupt_json() {
        let store = MemoryPrefsStore::with_entries([("showcase", "{not json")]);
        let loaded: Result<Option<ShowcasePrefs>, String> = load_pref_with(&store, "showcase");
        assert!(loaded.is_err());
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "{}").expect("save");
        store_obj.delete_pref("k").expect("delete");
    }
}
