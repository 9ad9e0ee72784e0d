//! Placement engine for crossword grids.
//!
//! This crate decides where a word may go and commits it to a [`Grid`](crosslace_core::Grid).
//! It is the only layer that mutates word occupancy, so the grid invariants (every crossing
//! word agrees on the shared letter, blocked cells carry no words, numbers are never reused)
//! hold as long as callers go through it.
//!
//! # Overview
//!
//! 1. **Legality**
//!    - [`can_place`]: pure check returning the crossing positions or a [`PlacementRejection`].
//!
//! 2. **Mutation**
//!    - [`place`] and [`remove`]: commit and retract one word.
//!    - [`Puzzle`]: grid plus word collection, with move, block and renumber operations.
//!
//! 3. **Search**
//!    - [`find_intersections`]: shared-letter candidates ranked by quality.
//!    - [`auto_place`]: greedy first-fit batch placement.
//!
//! 4. **Testing**
//!    - [`testing::PlacementTester`]: fluent harness for placement scenarios.
//!
//! # Examples
//!
//! ```
//! use crosslace_core::Position;
//! use crosslace_placement::{Puzzle, WordEntry};
//!
//! let mut puzzle = Puzzle::new(9, 9)?;
//! let outcome = puzzle.auto_place(&[
//!     WordEntry::new("stone", "Pebble"),
//!     WordEntry::new("tones", "Musical sounds"),
//! ]);
//! assert_eq!(outcome.placed.len(), 2);
//! assert_eq!(puzzle.word(outcome.placed[0].id()).map(|w| w.start()), Some(Position::new(4, 2)));
//! assert_eq!(puzzle.down().len(), 1);
//! # Ok::<(), crosslace_core::GridError>(())
//! ```

mod auto_place;
mod engine;
mod error;
mod intersection;
mod legality;
mod puzzle;
pub mod testing;

pub use self::{
    auto_place::{AutoPlaceOutcome, SkipReason, SkippedEntry, WordEntry, auto_place},
    engine::{Placement, place, remove},
    error::{PlacementError, PlacementRejection},
    intersection::{IntersectionCandidate, find_intersections},
    legality::{MIN_WORD_LEN, can_place},
    puzzle::{Puzzle, PuzzleStatistics},
};
