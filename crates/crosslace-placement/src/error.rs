use crosslace_core::{GridError, Position, WordError, WordId};

/// Why a candidate placement is illegal.
///
/// Variants are listed in the order [`can_place`](crate::can_place) checks them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum PlacementRejection {
    /// The answer has fewer than two letters.
    #[display("word of length {len} is too short")]
    TooShort {
        /// Answer length.
        len: usize,
    },
    /// The anchor or a later letter falls outside the grid.
    #[display("cell {position} is outside the grid")]
    OutOfBounds {
        /// First position outside the grid.
        position: Position,
    },
    /// A letter would land on a blocked cell.
    #[display("cell {position} is blocked")]
    Blocked {
        /// The blocked position.
        position: Position,
    },
    /// Every cell already holds the same letter; the placement would add nothing.
    #[display("word duplicates existing coverage")]
    FullDuplicate,
    /// A cell already holds a different letter.
    #[display("cell {position} holds {existing:?}, word needs {proposed:?}")]
    LetterConflict {
        /// Conflicting position.
        position: Position,
        /// Letter already in the grid.
        existing: char,
        /// Letter the word would write.
        proposed: char,
    },
    /// The grid already has words and this one crosses none of them.
    #[display("word does not intersect the existing puzzle")]
    Isolated,
}

/// Errors raised by placement mutations and the puzzle session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlacementError {
    /// The placement failed the legality check; the grid was not modified.
    #[display("illegal placement: {_0}")]
    IllegalPlacement(#[from] PlacementRejection),
    /// A grid access failed.
    #[display("grid error: {_0}")]
    Grid(#[from] GridError),
    /// The answer could not be normalized.
    #[display("invalid answer: {_0}")]
    Word(#[from] WordError),
    /// No word with this id exists in the puzzle.
    #[display("unknown word {id}")]
    UnknownWord {
        /// The missing id.
        id: WordId,
    },
}
