//! The word collection keyed by identifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Word, WordId};

/// Words keyed by [`WordId`], iterated in id (creation) order.
///
/// The collection also allocates identifiers. Ids are never reused, even after removal.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Direction, Position, Word, WordCollection};
///
/// let mut words = WordCollection::new();
/// let id = words.allocate_id();
/// words.insert(Word::new(id, "cat", "Pet", Direction::Horizontal, Position::new(0, 0))?);
///
/// assert_eq!(words.get(id).map(Word::text), Some("CAT"));
/// assert!(words.remove(id).is_some());
/// assert_ne!(words.allocate_id(), id);
/// # Ok::<(), crosslace_core::WordError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordCollection {
    words: BTreeMap<WordId, Word>,
    next_id: u32,
}

impl WordCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh identifier.
    pub fn allocate_id(&mut self) -> WordId {
        self.next_id = self.next_id.saturating_add(1);
        WordId::new(self.next_id)
    }

    /// Inserts a word, replacing any word with the same id. Returns the replaced word.
    pub fn insert(&mut self, word: Word) -> Option<Word> {
        self.next_id = self.next_id.max(word.id().get());
        self.words.insert(word.id(), word)
    }

    /// Removes and returns the word with `id`.
    pub fn remove(&mut self, id: WordId) -> Option<Word> {
        self.words.remove(&id)
    }

    /// Returns the word with `id`.
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(&id)
    }

    /// Returns the word with `id` mutably.
    pub fn get_mut(&mut self, id: WordId) -> Option<&mut Word> {
        self.words.get_mut(&id)
    }

    /// Returns `true` if a word with `id` exists.
    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.words.contains_key(&id)
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over words in id order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Word> {
        self.words.values()
    }

    /// Iterates over words mutably in id order.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Word> {
        self.words.values_mut()
    }

    /// Iterates over the normalized answers in id order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.words.values().map(Word::text)
    }

    /// Removes every word. Id allocation continues from where it was.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl<'a> IntoIterator for &'a WordCollection {
    type Item = &'a Word;
    type IntoIter = std::collections::btree_map::Values<'a, WordId, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.values()
    }
}

impl FromIterator<Word> for WordCollection {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut words = Self::new();
        for word in iter {
            words.insert(word);
        }
        words
    }
}
