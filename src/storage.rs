//! Key-value storage seam
//!
//! The game depends on two client-local key-value capabilities with
//! different lifetimes: a transient session store carrying the settings
//! hand-off between the collector and the engine, and a durable store
//! holding the custom word list and the language preference. Both are
//! expressed through the same [`Storage`] trait so an embedding shell can
//! plug in whatever backs them (browser storage, files, ...) and tests can
//! use the in-memory implementation.

use std::collections::HashMap;

/// Trait for a string key-value store
///
/// Implementations are not required to be durable; the caller decides which
/// instance carries which lifetime. All operations are infallible: a backing
/// store that can fail should surface that at construction time, not per
/// access.
pub trait Storage {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String);

    /// Removes the entry under `key` if present
    fn remove(&mut self, key: &str);
}

/// In-memory [`Storage`] implementation
///
/// Used as the test fake and as a reasonable default for shells without a
/// persistent backend. Dropping it loses all entries, which makes it a
/// natural fit for the session-scoped capability.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_get() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("key"), None);

        store.set("key", "value".to_owned());
        assert_eq!(store.get("key"), Some("value".to_owned()));
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::new();
        store.set("key", "first".to_owned());
        store.set("key", "second".to_owned());
        assert_eq!(store.get("key"), Some("second".to_owned()));
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::new();
        store.set("key", "value".to_owned());
        store.remove("key");
        assert_eq!(store.get("key"), None);

        // Removing a missing key is a no-op
        store.remove("key");
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn test_memory_store_independent_keys() {
        let mut store = MemoryStore::new();
        store.set("a", "1".to_owned());
        store.set("b", "2".to_owned());
        store.remove("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some("2".to_owned()));
    }
}
