//! The word value object and answer normalization.

use serde::{Deserialize, Serialize};

use crate::{Direction, Position, difficulty};

/// Opaque identifier of a word, unique within a [`WordCollection`].
///
/// Identifiers are allocated monotonically and never reused, so ordering by id is the same as
/// ordering by creation.
///
/// [`WordCollection`]: crate::WordCollection
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("w{_0}")]
#[serde(transparent)]
pub struct WordId(u32);

impl WordId {
    /// Wraps a raw identifier value.
    #[must_use]
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Shortest answer a [`Word`] may hold.
pub const MIN_WORD_LEN: usize = 2;

/// Errors that can occur when normalizing an answer or building a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The answer has no letters.
    #[display("answer is empty")]
    Empty,
    /// The answer contains a character outside letters, space, hyphen and apostrophe.
    #[display("invalid character {ch:?} in answer")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The answer starts or ends with a separator.
    #[display("answer cannot start or end with {ch:?}")]
    EdgeSeparator {
        /// The offending separator.
        ch: char,
    },
    /// The answer has fewer than [`MIN_WORD_LEN`] letters.
    #[display("answer has {len} letters, at least {MIN_WORD_LEN} required")]
    TooShort {
        /// Number of letters after normalization.
        len: usize,
    },
}

/// Returns `true` for separators allowed inside a raw answer and dropped by normalization.
#[must_use]
#[inline]
pub fn is_answer_separator(ch: char) -> bool {
    matches!(ch, ' ' | '-' | '\'')
}

/// Normalizes a raw answer into uppercase ASCII letters.
///
/// Surrounding whitespace is trimmed; internal spaces, hyphens and apostrophes are dropped.
/// Length is not checked here.
///
/// # Errors
///
/// Returns [`WordError::Empty`] when no letters remain, [`WordError::InvalidCharacter`] for
/// digits, punctuation or non-ASCII letters and [`WordError::EdgeSeparator`] when a hyphen or
/// apostrophe leads or trails the answer.
///
/// # Examples
///
/// ```
/// use crosslace_core::{WordError, normalize_answer};
///
/// assert_eq!(normalize_answer("rock-'n' roll").unwrap(), "ROCKNROLL");
/// assert_eq!(normalize_answer("  "), Err(WordError::Empty));
/// assert_eq!(normalize_answer("R2D2"), Err(WordError::InvalidCharacter { ch: '2' }));
/// assert_eq!(normalize_answer("-cat"), Err(WordError::EdgeSeparator { ch: '-' }));
/// ```
pub fn normalize_answer(raw: &str) -> Result<String, WordError> {
    let raw = raw.trim();
    let mut text = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphabetic() {
            text.push(ch.to_ascii_uppercase());
        } else if !is_answer_separator(ch) {
            return Err(WordError::InvalidCharacter { ch });
        }
    }
    if text.is_empty() {
        return Err(WordError::Empty);
    }
    let edges = [raw.chars().next(), raw.chars().next_back()];
    if let Some(ch) = edges.into_iter().flatten().find(|ch| is_answer_separator(*ch)) {
        return Err(WordError::EdgeSeparator { ch });
    }
    Ok(text)
}

/// A placed (or candidate) word: answer, clue, orientation and anchor.
///
/// The answer is stored normalized and its difficulty is derived once at construction.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Direction, Position, Word, WordId};
///
/// let word = Word::new(WordId::new(1), "cat", "Feline pet", Direction::Horizontal, Position::new(2, 2))?;
/// assert_eq!(word.text(), "CAT");
/// assert_eq!(word.end(), Some(Position::new(2, 4)));
/// # Ok::<(), crosslace_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    id: WordId,
    text: String,
    clue: String,
    direction: Direction,
    start: Position,
    number: Option<u32>,
    difficulty: f64,
}

impl Word {
    /// Creates a word, normalizing `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` fails [`normalize_answer`] or has fewer than
    /// [`MIN_WORD_LEN`] letters.
    pub fn new(
        id: WordId,
        text: &str,
        clue: impl Into<String>,
        direction: Direction,
        start: Position,
    ) -> Result<Self, WordError> {
        let text = normalize_answer(text)?;
        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort { len: text.len() });
        }
        let difficulty = difficulty::difficulty(&text);
        Ok(Self {
            id,
            text,
            clue: clue.into(),
            direction,
            start,
            number: None,
            difficulty,
        })
    }

    /// Returns the word identifier.
    #[must_use]
    pub fn id(&self) -> WordId {
        self.id
    }

    /// Returns the normalized answer.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the clue text.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Returns the orientation.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the anchor (first letter) position.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the answer length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the answer has no letters. Never true for a constructed word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the clue number, once the word has been placed.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    /// Returns the derived difficulty in `[0, 1]`.
    #[must_use]
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Sets the clue number.
    pub fn set_number(&mut self, number: Option<u32>) {
        self.number = number;
    }

    /// Replaces the clue text.
    pub fn set_clue(&mut self, clue: impl Into<String>) {
        self.clue = clue.into();
    }

    /// Returns a copy of this word anchored elsewhere, with its number cleared.
    #[must_use]
    pub fn relocated(&self, direction: Direction, start: Position) -> Self {
        Self {
            direction,
            start,
            number: None,
            ..self.clone()
        }
    }

    /// Returns the position of the last letter, or `None` on coordinate overflow.
    #[must_use]
    pub fn end(&self) -> Option<Position> {
        self.start
            .step(self.direction, self.len().checked_sub(1)?)
    }

    /// Iterates over `(position, letter)` pairs of the word slot, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.text
            .chars()
            .enumerate()
            .map_while(|(i, ch)| Some((self.start.step(self.direction, i)?, ch)))
    }
}
