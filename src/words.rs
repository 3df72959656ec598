//! User-managed custom word list
//!
//! The custom list lives in the durable store as a JSON array of strings and
//! survives across sessions, unlike the settings hand-off. It is exposed to
//! the settings collector as a word source and has no other coupling to the
//! round engine.

use crate::{constants, storage::Storage};

/// The user's custom word list, kept sorted and free of duplicates
///
/// Every mutation is written back to the durable store immediately, so a
/// loaded instance and the persisted blob never drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomWords {
    words: Vec<String>,
}

impl CustomWords {
    /// Loads the custom word list from the durable store
    ///
    /// A missing or unparseable blob yields an empty list; a corrupt store
    /// should never block the user from rebuilding their words.
    pub fn load<S: Storage>(store: &S) -> Self {
        let words = store
            .get(constants::storage::CUSTOM_WORDS_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();
        Self { words }
    }

    /// Returns the words in sorted order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words in the list
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the list has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Adds a word and persists the list
    ///
    /// The input is trimmed first. Blank and duplicate entries are no-ops.
    ///
    /// # Returns
    ///
    /// `true` if the word was added, `false` if the list is unchanged
    pub fn add<S: Storage>(&mut self, word: &str, store: &mut S) -> bool {
        let word = word.trim();
        if word.is_empty() || self.words.iter().any(|existing| existing == word) {
            return false;
        }

        self.words.push(word.to_owned());
        self.words.sort();
        self.persist(store);
        true
    }

    /// Removes a word by exact value match and persists the list
    ///
    /// # Returns
    ///
    /// `true` if the word was present and removed, `false` otherwise
    pub fn remove<S: Storage>(&mut self, word: &str, store: &mut S) -> bool {
        let count_before = self.words.len();
        self.words.retain(|existing| existing != word);
        let removed = self.words.len() != count_before;
        if removed {
            self.persist(store);
        }
        removed
    }

    fn persist<S: Storage>(&self, store: &mut S) {
        store.set(
            constants::storage::CUSTOM_WORDS_KEY,
            serde_json::to_string(&self.words).expect("default serializer cannot fail"),
        );
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::new();
        let words = CustomWords::load(&store);
        assert!(words.is_empty());
    }

    #[test]
    fn test_load_tolerates_corrupt_blob() {
        let mut store = MemoryStore::new();
        store.set(constants::storage::CUSTOM_WORDS_KEY, "not json".to_owned());
        let words = CustomWords::load(&store);
        assert!(words.is_empty());
    }

    #[test]
    fn test_add_keeps_list_sorted() {
        let mut store = MemoryStore::new();
        let mut words = CustomWords::load(&store);

        assert!(words.add("Zebra", &mut store));
        assert!(words.add("Apple", &mut store));
        assert!(words.add("Mango", &mut store));

        assert_eq!(words.words(), &["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_add_trims_whitespace() {
        let mut store = MemoryStore::new();
        let mut words = CustomWords::load(&store);

        assert!(words.add("  Pizza  ", &mut store));
        assert_eq!(words.words(), &["Pizza"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut store = MemoryStore::new();
        let mut words = CustomWords::load(&store);

        assert!(!words.add("", &mut store));
        assert!(!words.add("   ", &mut store));
        assert!(words.is_empty());
        // Nothing was persisted either
        assert_eq!(store.get(constants::storage::CUSTOM_WORDS_KEY), None);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut store = MemoryStore::new();
        let mut words = CustomWords::load(&store);

        assert!(words.add("Pizza", &mut store));
        assert!(!words.add("Pizza", &mut store));
        assert!(!words.add("  Pizza ", &mut store));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_remove_exact_match() {
        let mut store = MemoryStore::new();
        let mut words = CustomWords::load(&store);
        words.add("Pizza", &mut store);
        words.add("Sushi", &mut store);

        assert!(words.remove("Pizza", &mut store));
        assert_eq!(words.words(), &["Sushi"]);

        assert!(!words.remove("Pizza", &mut store));
        assert!(!words.remove("pizza", &mut store));
        assert_eq!(words.words(), &["Sushi"]);
    }

    #[test]
    fn test_mutations_persist_across_loads() {
        let mut store = MemoryStore::new();
        let mut words = CustomWords::load(&store);
        words.add("Banana", &mut store);
        words.add("Avocado", &mut store);
        words.remove("Banana", &mut store);

        let reloaded = CustomWords::load(&store);
        assert_eq!(reloaded.words(), &["Avocado"]);
    }
}
