//! A single grid position and its occupancy records.

use serde::{Deserialize, Serialize};

use crate::{Direction, DirectionSet, WordId};

/// The role a cell plays within one word passing through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellEntry {
    /// The word passing through the cell.
    pub word_id: WordId,
    /// The orientation of that word.
    pub direction: Direction,
    /// The cell holds the word's first letter.
    pub is_start: bool,
    /// The cell holds the word's last letter.
    pub is_end: bool,
}

/// One grid position with letter, block, number and word-reference state.
///
/// The word references are kept as one [`CellEntry`] per word, in placement order. The
/// `word_ids`, `directions`, `is_start`, `is_end` and `is_intersection` views are derived
/// from those entries, so detaching a word restores exactly the state the remaining words
/// describe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    letter: Option<char>,
    number: Option<u32>,
    blocked: bool,
    entries: Vec<CellEntry>,
    /// Saved answer letter for a presentation layer that blanks `letter` during play.
    ///
    /// Nothing in this workspace reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_value: Option<char>,
}

impl Cell {
    /// Creates an empty, unblocked cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the letter, if any.
    #[must_use]
    #[inline]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns the clue number, if the cell starts a word.
    #[must_use]
    #[inline]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Returns `true` if the cell is blocked.
    #[must_use]
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Returns `true` if the cell holds a letter and is not blocked.
    #[must_use]
    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.blocked && self.letter.is_some()
    }

    /// Returns the occupancy entries in placement order.
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[CellEntry] {
        &self.entries
    }

    /// Iterates over the ids of words passing through the cell, in placement order.
    pub fn word_ids(&self) -> impl ExactSizeIterator<Item = WordId> + '_ {
        self.entries.iter().map(|entry| entry.word_id)
    }

    /// Returns `true` if `word_id` passes through the cell.
    #[must_use]
    pub fn references(&self, word_id: WordId) -> bool {
        self.entries.iter().any(|entry| entry.word_id == word_id)
    }

    /// Returns the orientations of the words passing through the cell.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.entries.iter().map(|entry| entry.direction).collect()
    }

    /// Returns `true` if any word starts at this cell.
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.entries.iter().any(|entry| entry.is_start)
    }

    /// Returns `true` if any word ends at this cell.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.entries.iter().any(|entry| entry.is_end)
    }

    /// Returns `true` if at least two words pass through the cell.
    #[must_use]
    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.entries.len() >= 2
    }

    /// Records that `entry.word_id` passes through this cell with `letter`.
    ///
    /// A word already referenced is not added twice; its start/end role is merged instead.
    /// Callers are responsible for letter agreement between crossing words.
    pub fn attach(&mut self, letter: char, entry: CellEntry) {
        self.letter = Some(letter);
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|existing| existing.word_id == entry.word_id)
        {
            existing.is_start |= entry.is_start;
            existing.is_end |= entry.is_end;
        } else {
            self.entries.push(entry);
        }
    }

    /// Drops the reference to `word_id`.
    ///
    /// When no words remain the letter and number are cleared. The number is also cleared
    /// when the remaining words no longer start here. Returns `false` if the word was not
    /// referenced.
    pub fn detach(&mut self, word_id: WordId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.word_id != word_id);
        if self.entries.len() == before {
            return false;
        }
        if self.entries.is_empty() {
            self.letter = None;
        }
        if !self.is_start() {
            self.number = None;
        }
        true
    }

    /// Sets the clue number.
    pub fn set_number(&mut self, number: Option<u32>) {
        self.number = number;
    }

    /// Blocks the cell, discarding its letter, number and word references.
    ///
    /// Returns the ids of the words that referenced the cell.
    pub fn block(&mut self) -> Vec<WordId> {
        let dropped = self.word_ids().collect();
        self.letter = None;
        self.number = None;
        self.entries.clear();
        self.game_value = None;
        self.blocked = true;
        dropped
    }

    /// Unblocks the cell, leaving it empty.
    pub fn unblock(&mut self) {
        self.blocked = false;
    }

    /// Overwrites the raw letter without touching word references.
    ///
    /// This exists for reconstituting cells from external data; placement goes through
    /// [`Cell::attach`].
    pub fn set_letter(&mut self, letter: Option<char>) {
        self.letter = letter;
    }
}
