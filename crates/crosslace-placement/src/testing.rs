//! Test utilities for placement rules.
//!
//! This module provides [`PlacementTester`], a fluent harness over a [`Puzzle`] for checking
//! that words land, cross and get rejected where expected.
//!
//! # Example
//!
//! ```
//! # use crosslace_core::Direction;
//! # use crosslace_placement::{PlacementRejection, testing::PlacementTester};
//! PlacementTester::new(7, 7)
//!     .place("CAT", 2, 2, Direction::Horizontal)
//!     .place("CAR", 2, 2, Direction::Vertical)
//!     .assert_intersection(2, 2)
//!     .assert_rejected("DOG", 5, 0, Direction::Horizontal, PlacementRejection::is_isolated);
//! ```

use crosslace_core::{Direction, Grid, Position, WordId};

use crate::{PlacementError, PlacementRejection, Puzzle};

/// A test harness for placement scenarios.
///
/// Words are referred to by their answer text; placing the same answer twice makes lookups
/// ambiguous and the first match wins.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug, Clone)]
pub struct PlacementTester {
    puzzle: Puzzle,
}

impl PlacementTester {
    /// Creates a tester over an empty `width x height` grid.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are outside the grid policy.
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            puzzle: Puzzle::new(width, height).unwrap(),
        }
    }

    /// Returns the grid under test.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    /// Returns the puzzle under test.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Blocks the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[track_caller]
    pub fn block(mut self, row: usize, col: usize) -> Self {
        self.puzzle.block_cell(Position::new(row, col)).unwrap();
        self
    }

    /// Places `text` and returns self for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the placement is rejected.
    #[track_caller]
    pub fn place(mut self, text: &str, row: usize, col: usize, direction: Direction) -> Self {
        let start = Position::new(row, col);
        if let Err(err) = self.puzzle.add_word(text, "", direction, start) {
            panic!("expected {text} {direction} at {start} to be placed, got: {err}");
        }
        self
    }

    /// Removes the word whose answer is `text`.
    ///
    /// # Panics
    ///
    /// Panics if no such word was placed.
    #[track_caller]
    pub fn remove(mut self, text: &str) -> Self {
        let id = self.word_id(text);
        self.puzzle.remove_word(id).unwrap();
        self
    }

    /// Asserts that placing `text` is rejected with a reason matching `pred`, and that the
    /// attempt leaves the puzzle untouched.
    ///
    /// # Panics
    ///
    /// Panics if the placement succeeds or fails for another reason.
    #[track_caller]
    pub fn assert_rejected(
        mut self,
        text: &str,
        row: usize,
        col: usize,
        direction: Direction,
        pred: fn(&PlacementRejection) -> bool,
    ) -> Self {
        let start = Position::new(row, col);
        let before = self.puzzle.clone();
        match self.puzzle.add_word(text, "", direction, start) {
            Err(PlacementError::IllegalPlacement(rejection)) => {
                assert!(
                    pred(&rejection),
                    "unexpected rejection for {text} {direction} at {start}: {rejection}"
                );
            }
            Err(err) => panic!("expected a placement rejection for {text}, got: {err}"),
            Ok(_) => panic!("expected {text} {direction} at {start} to be rejected"),
        }
        assert_eq!(self.puzzle, before, "rejected placement modified the puzzle");
        self
    }

    /// Asserts that `(row, col)` is shared by at least two words.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not an intersection.
    #[track_caller]
    pub fn assert_intersection(self, row: usize, col: usize) -> Self {
        let pos = Position::new(row, col);
        let cell = self.grid().get(pos).unwrap();
        assert!(
            cell.is_intersection(),
            "expected an intersection at {pos}, cell has {} word(s)",
            cell.entries().len()
        );
        self
    }

    /// Asserts that `(row, col)` is referenced by exactly the words with the given answers,
    /// in placement order.
    ///
    /// # Panics
    ///
    /// Panics if the references differ.
    #[track_caller]
    pub fn assert_word_ids(self, row: usize, col: usize, texts: &[&str]) -> Self {
        let pos = Position::new(row, col);
        let expected: Vec<WordId> = texts.iter().map(|text| self.word_id(text)).collect();
        let actual: Vec<WordId> = self.grid().get(pos).unwrap().word_ids().collect();
        assert_eq!(actual, expected, "word references at {pos}");
        self
    }

    /// Asserts the clue number at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the number differs.
    #[track_caller]
    pub fn assert_number(self, row: usize, col: usize, number: Option<u32>) -> Self {
        let pos = Position::new(row, col);
        assert_eq!(
            self.grid().get(pos).unwrap().number(),
            number,
            "number at {pos}"
        );
        self
    }

    /// Asserts the letter at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the letter differs.
    #[track_caller]
    pub fn assert_letter(self, row: usize, col: usize, letter: Option<char>) -> Self {
        let pos = Position::new(row, col);
        assert_eq!(
            self.grid().get(pos).unwrap().letter(),
            letter,
            "letter at {pos}"
        );
        self
    }

    #[track_caller]
    fn word_id(&self, text: &str) -> WordId {
        let text = text.to_ascii_uppercase();
        self.puzzle
            .words()
            .iter()
            .find(|word| word.text() == text)
            .map(|word| word.id())
            .unwrap_or_else(|| panic!("no word {text} has been placed"))
    }
}
