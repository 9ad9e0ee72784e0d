//! Core data structures for crossword construction.
//!
//! This crate provides the plain-data model shared by placement and validation: the grid of
//! cells, the word value object, the word collection, plus the scoring and hashing utilities
//! both validators rely on. Nothing here decides whether a placement is legal; that belongs to
//! `crosslace-placement`.
//!
//! # Overview
//!
//! 1. **Grid model**
//!    - [`grid`]: [`Grid`], a rectangular `height x width` matrix with bounds-checked access,
//!      blocking and the clue-number counter.
//!    - [`cell`]: [`Cell`], with per-word occupancy [`CellEntry`] records from which the
//!      start/end/intersection flags are derived.
//!    - [`position`]: [`Position`], [`Direction`] and [`DirectionSet`].
//!
//! 2. **Word model**
//!    - [`word`]: [`Word`], [`WordId`] and answer normalization.
//!    - [`collection`]: [`WordCollection`], id allocation and ordered lookup.
//!
//! 3. **Shared utilities**
//!    - [`difficulty`]: heuristic answer difficulty in `[0, 1]`.
//!    - [`digest`]: SHA-256 content digests used as cache keys.
//!
//! # Examples
//!
//! ```
//! use crosslace_core::{CellEntry, Direction, Grid, Position, WordId};
//!
//! let mut grid = Grid::new(7, 7)?;
//! let cell = grid.get_mut(Position::new(3, 3))?;
//! cell.attach('A', CellEntry {
//!     word_id: WordId::new(1),
//!     direction: Direction::Horizontal,
//!     is_start: true,
//!     is_end: false,
//! });
//! assert!(grid.has_words());
//! # Ok::<(), crosslace_core::GridError>(())
//! ```

pub mod cell;
pub mod collection;
pub mod difficulty;
pub mod digest;
pub mod grid;
pub mod position;
pub mod word;

pub use self::{
    cell::{Cell, CellEntry},
    collection::WordCollection,
    digest::ContentHash,
    grid::{Grid, GridError},
    position::{Direction, DirectionSet, Position},
    word::{MIN_WORD_LEN, Word, WordError, WordId, is_answer_separator, normalize_answer},
};
