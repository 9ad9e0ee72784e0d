//! Word and grid quality validation for crosswords.
//!
//! Validation never fails: problems with the input are reported as [`Finding`]s grouped by
//! [`Severity`], and unexpected internal failures collapse into a single
//! [`FindingKind::Internal`] error with score 0. Finding kinds are the stable contract of a
//! report; message strings are meant for humans.
//!
//! # Overview
//!
//! - [`word`]: [`WordQualityValidator`] checks one answer and clue (character set, length,
//!   uniqueness against the puzzle, clue obviousness and grammar) and scores it.
//! - [`grid`]: [`GridQualityValidator`] runs structure, placement, intersection,
//!   connectivity, density, symmetry and aesthetics checks over a grid and its words, scores
//!   the result and caches it by content in an [`LruCache`].
//! - [`ValidatorConfig`] holds the thresholds; [`Strictness`] adjusts how grid findings are
//!   classified.
//!
//! # Examples
//!
//! ```
//! use crosslace_core::{Direction, Position};
//! use crosslace_placement::Puzzle;
//! use crosslace_validator::{
//!     GridQualityValidator, Strictness, WordContext, WordQualityValidator,
//! };
//!
//! let mut puzzle = Puzzle::new(9, 9)?;
//! puzzle.add_word("planet", "Orbits a star.", Direction::Horizontal, Position::new(4, 1))?;
//!
//! let words = WordQualityValidator::default();
//! let context = WordContext::for_puzzle(puzzle.grid(), puzzle.words());
//! let report = words.validate("comet", Some("Icy visitor with a tail."), &context);
//! assert!(report.valid);
//!
//! let mut grids = GridQualityValidator::default();
//! let report = grids.validate(puzzle.grid(), puzzle.words(), Strictness::Normal);
//! assert!(report.valid);
//! assert!(report.score <= 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    cache::LruCache,
    config::{Strictness, ValidatorConfig},
    error::ValidationError,
    grid::GridQualityValidator,
    report::{
        Finding, FindingKind, Findings, GridDetails, GridReport, Severity, WordMetadata,
        WordReport,
    },
    word::{WordContext, WordQualityValidator},
};

mod cache;
mod config;
mod error;
pub mod grid;
mod report;
pub mod word;
