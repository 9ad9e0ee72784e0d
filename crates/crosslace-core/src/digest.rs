//! Deterministic content hashing of grids and word collections.
//!
//! Digests are SHA-256 over a canonical byte encoding, so equal content always produces equal
//! digests regardless of allocation or iteration details. They are used as cache keys for
//! validation reports.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::{Direction, Grid, WordCollection};

/// A 256-bit content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Returns the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hashes a sequence of digests and a tag into one digest.
    #[must_use]
    pub fn combine(parts: &[ContentHash], tag: &str) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.0);
        }
        hasher.update(tag.as_bytes());
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

fn direction_tag(direction: Direction) -> u8 {
    match direction {
        Direction::Horizontal => b'H',
        Direction::Vertical => b'V',
    }
}

/// Hashes the grid row-major: dimensions, then per cell the letter, blocked flag, number and
/// word references.
///
/// Word references are included because validation inspects them; two grids differing only
/// in which words claim a cell must not share a digest.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, Position, digest::grid_digest};
///
/// let mut a = Grid::new(5, 5)?;
/// let b = a.clone();
/// assert_eq!(grid_digest(&a), grid_digest(&b));
///
/// a.block(Position::new(0, 0))?;
/// assert_ne!(grid_digest(&a), grid_digest(&b));
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
#[must_use]
pub fn grid_digest(grid: &Grid) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update((grid.width() as u64).to_le_bytes());
    hasher.update((grid.height() as u64).to_le_bytes());
    for (_, cell) in grid.cells() {
        hasher.update((u32::from(cell.letter().unwrap_or('\0'))).to_le_bytes());
        hasher.update([u8::from(cell.is_blocked())]);
        hasher.update(cell.number().unwrap_or(0).to_le_bytes());
        hasher.update((cell.entries().len() as u64).to_le_bytes());
        for entry in cell.entries() {
            hasher.update(entry.word_id.get().to_le_bytes());
            hasher.update([
                direction_tag(entry.direction),
                u8::from(entry.is_start),
                u8::from(entry.is_end),
            ]);
        }
    }
    ContentHash(hasher.finalize().into())
}

fn update_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

/// Hashes the words sorted by id: the id, then each text field prefixed by its length, then
/// direction, anchor and number.
#[must_use]
pub fn words_digest(words: &WordCollection) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update((words.len() as u64).to_le_bytes());
    for word in words {
        hasher.update(word.id().get().to_le_bytes());
        update_field(&mut hasher, word.text().as_bytes());
        update_field(&mut hasher, word.clue().as_bytes());
        hasher.update([direction_tag(word.direction())]);
        hasher.update((word.start().row as u64).to_le_bytes());
        hasher.update((word.start().col as u64).to_le_bytes());
        hasher.update(word.number().unwrap_or(0).to_le_bytes());
    }
    ContentHash(hasher.finalize().into())
}
