use crosslace_core::{
    Direction, Grid, GridError, Position, Word, WordCollection, WordId, normalize_answer,
};

use crate::{
    AutoPlaceOutcome, PlacementError, WordEntry, auto_place, can_place, place, remove,
};

/// Aggregate counts over a puzzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleStatistics {
    /// Number of words in the collection.
    pub word_count: usize,
    /// Unblocked cells holding a letter.
    pub filled_cells: usize,
    /// Blocked cells.
    pub blocked_cells: usize,
    /// Cells shared by at least two words.
    pub intersections: usize,
    /// Mean word difficulty, `0.0` without words.
    pub mean_difficulty: f64,
}

/// A crossword under construction: the grid plus the words placed on it.
///
/// All mutations go through the placement engine, so the grid and the collection stay in
/// step: every word in the collection occupies its slot, and every cell reference names a
/// word in the collection.
///
/// # Example
///
/// ```
/// use crosslace_core::{Direction, Position};
/// use crosslace_placement::{PlacementError, PlacementRejection, Puzzle};
///
/// let mut puzzle = Puzzle::new(7, 7)?;
/// let cat = puzzle.add_word("cat", "Feline pet", Direction::Horizontal, Position::new(2, 2))?;
/// puzzle.add_word("car", "Vehicle", Direction::Vertical, Position::new(2, 2))?;
///
/// let err = puzzle
///     .add_word("dog", "Canine", Direction::Horizontal, Position::new(5, 0))
///     .unwrap_err();
/// assert_eq!(err, PlacementError::IllegalPlacement(PlacementRejection::Isolated));
///
/// puzzle.remove_word(cat)?;
/// assert_eq!(puzzle.words().len(), 1);
/// # Ok::<(), PlacementError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    grid: Grid,
    words: WordCollection,
}

impl Puzzle {
    /// Creates an empty puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] when a dimension is outside the grid policy.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            words: WordCollection::new(),
        })
    }

    /// Wraps an existing grid and word collection, for example after loading them.
    ///
    /// The two are trusted to be consistent; run the grid validator to check.
    #[must_use]
    pub fn from_parts(grid: Grid, words: WordCollection) -> Self {
        Self { grid, words }
    }

    /// Splits the puzzle into its grid and word collection.
    #[must_use]
    pub fn into_parts(self) -> (Grid, WordCollection) {
        (self.grid, self.words)
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the word collection.
    #[must_use]
    pub fn words(&self) -> &WordCollection {
        &self.words
    }

    /// Returns the word with `id`.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// Checks a raw answer against the grid without placing it.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Word`] if the answer does not normalize and
    /// [`PlacementError::IllegalPlacement`] if the placement is illegal.
    pub fn can_place(
        &self,
        text: &str,
        direction: Direction,
        start: Position,
    ) -> Result<Vec<Position>, PlacementError> {
        let text = normalize_answer(text)?;
        Ok(can_place(&self.grid, &text, start, direction)?)
    }

    /// Places a new word and records it in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Word`] for an invalid answer and
    /// [`PlacementError::IllegalPlacement`] when the placement is rejected. The puzzle is
    /// unchanged on error.
    pub fn add_word(
        &mut self,
        text: &str,
        clue: &str,
        direction: Direction,
        start: Position,
    ) -> Result<WordId, PlacementError> {
        let text = normalize_answer(text)?;
        can_place(&self.grid, &text, start, direction)?;
        let id = self.words.allocate_id();
        let mut word = Word::new(id, &text, clue, direction, start)?;
        let placement = place(&mut self.grid, &word)?;
        word.set_number(Some(placement.number));
        self.words.insert(word);
        Ok(id)
    }

    /// Removes a word from the collection and retracts it from the grid.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::UnknownWord`] if no word has this id.
    pub fn remove_word(&mut self, id: WordId) -> Result<Word, PlacementError> {
        let word = self
            .words
            .remove(id)
            .ok_or(PlacementError::UnknownWord { id })?;
        remove(&mut self.grid, id);
        Ok(word)
    }

    /// Moves a word to a new slot by removing it and placing it again.
    ///
    /// When the new slot is illegal the original placement is restored exactly, number
    /// included.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::UnknownWord`] for an unknown id and
    /// [`PlacementError::IllegalPlacement`] when the new slot is rejected.
    pub fn move_word(
        &mut self,
        id: WordId,
        direction: Direction,
        start: Position,
    ) -> Result<(), PlacementError> {
        let word = self.words.get(id).ok_or(PlacementError::UnknownWord { id })?;
        let mut moved = word.relocated(direction, start);
        let snapshot = self.grid.clone();
        remove(&mut self.grid, id);
        match place(&mut self.grid, &moved) {
            Ok(placement) => {
                moved.set_number(Some(placement.number));
                self.words.insert(moved);
                Ok(())
            }
            Err(err) => {
                self.grid = snapshot;
                Err(err)
            }
        }
    }

    /// Replaces the clue of a word.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::UnknownWord`] for an unknown id.
    pub fn set_clue(&mut self, id: WordId, clue: &str) -> Result<(), PlacementError> {
        self.words
            .get_mut(id)
            .ok_or(PlacementError::UnknownWord { id })?
            .set_clue(clue);
        Ok(())
    }

    /// Blocks a cell, first removing every word passing through it.
    ///
    /// Returns the removed words.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Grid`] if `pos` is outside the grid.
    pub fn block_cell(&mut self, pos: Position) -> Result<Vec<Word>, PlacementError> {
        let ids: Vec<WordId> = self.grid.get(pos)?.word_ids().collect();
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            remove(&mut self.grid, id);
            removed.extend(self.words.remove(id));
        }
        self.grid.block(pos)?;
        Ok(removed)
    }

    /// Unblocks a cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Grid`] if `pos` is outside the grid.
    pub fn unblock_cell(&mut self, pos: Position) -> Result<(), PlacementError> {
        self.grid.unblock(pos)?;
        Ok(())
    }

    /// Places a batch of entries with the greedy heuristic; see [`auto_place`].
    pub fn auto_place(&mut self, entries: &[WordEntry]) -> AutoPlaceOutcome {
        auto_place(&mut self.grid, &mut self.words, entries)
    }

    /// Renumbers start cells in reading order (row-major), as printed crosswords do.
    ///
    /// Placement never renumbers on its own; call this before publishing.
    pub fn renumber(&mut self) {
        self.grid.reset_numbering();
        let starts: Vec<Position> = self
            .grid
            .cells()
            .filter(|(_, cell)| cell.is_start())
            .map(|(pos, _)| pos)
            .collect();
        for pos in starts {
            let number = self.grid.allocate_number();
            if let Ok(cell) = self.grid.get_mut(pos) {
                cell.set_number(Some(number));
            }
        }
        for word in self.words.iter_mut() {
            let number = self.grid.get(word.start()).ok().and_then(|cell| cell.number());
            word.set_number(number);
        }
    }

    /// Returns the words of one orientation ordered by clue number.
    #[must_use]
    pub fn clues(&self, direction: Direction) -> Vec<&Word> {
        let mut clues: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| word.direction() == direction)
            .collect();
        clues.sort_by_key(|word| (word.number().unwrap_or(u32::MAX), word.id()));
        clues
    }

    /// Returns the across clues ordered by number.
    #[must_use]
    pub fn across(&self) -> Vec<&Word> {
        self.clues(Direction::Horizontal)
    }

    /// Returns the down clues ordered by number.
    #[must_use]
    pub fn down(&self) -> Vec<&Word> {
        self.clues(Direction::Vertical)
    }

    /// Computes aggregate counts.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> PuzzleStatistics {
        let mut stats = PuzzleStatistics {
            word_count: self.words.len(),
            filled_cells: 0,
            blocked_cells: 0,
            intersections: 0,
            mean_difficulty: 0.0,
        };
        for (_, cell) in self.grid.cells() {
            stats.filled_cells += usize::from(cell.is_filled());
            stats.blocked_cells += usize::from(cell.is_blocked());
            stats.intersections += usize::from(cell.is_intersection());
        }
        if !self.words.is_empty() {
            let total: f64 = self.words.iter().map(Word::difficulty).sum();
            stats.mean_difficulty = total / self.words.len() as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Puzzle, WordId, WordId) {
        let mut puzzle = Puzzle::new(7, 7).unwrap();
        let cat = puzzle
            .add_word("cat", "Feline pet", Direction::Horizontal, Position::new(2, 2))
            .unwrap();
        let car = puzzle
            .add_word("car", "Vehicle", Direction::Vertical, Position::new(2, 2))
            .unwrap();
        (puzzle, cat, car)
    }

    #[test]
    fn test_add_word_records_number() {
        let (puzzle, cat, car) = sample();
        assert_eq!(puzzle.word(cat).unwrap().number(), Some(1));
        assert_eq!(puzzle.word(car).unwrap().number(), Some(1));
        assert!(puzzle.grid().get(Position::new(2, 2)).unwrap().is_intersection());
    }

    #[test]
    fn test_add_word_rejects_invalid_answer() {
        let mut puzzle = Puzzle::new(7, 7).unwrap();
        assert!(matches!(
            puzzle.add_word("c@t", "", Direction::Horizontal, Position::new(0, 0)),
            Err(PlacementError::Word(_))
        ));
        assert!(puzzle.words().is_empty());
    }

    #[test]
    fn test_remove_unknown_word() {
        let (mut puzzle, ..) = sample();
        assert_eq!(
            puzzle.remove_word(WordId::new(99)),
            Err(PlacementError::UnknownWord {
                id: WordId::new(99)
            })
        );
    }

    #[test]
    fn test_move_word_restores_on_failure() {
        let (mut puzzle, _, car) = sample();
        let before = puzzle.clone();
        let result = puzzle.move_word(car, Direction::Vertical, Position::new(5, 6));
        assert!(matches!(result, Err(PlacementError::IllegalPlacement(_))));
        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_move_word_to_new_slot() {
        let (mut puzzle, _, car) = sample();
        puzzle
            .move_word(car, Direction::Vertical, Position::new(1, 3))
            .unwrap();
        let moved = puzzle.word(car).unwrap();
        assert_eq!(moved.start(), Position::new(1, 3));
        assert_eq!(moved.number(), Some(2));
        assert!(!puzzle.grid().get(Position::new(2, 2)).unwrap().is_intersection());
        assert!(puzzle.grid().get(Position::new(2, 3)).unwrap().is_intersection());
    }

    #[test]
    fn test_block_cell_removes_crossing_words() {
        let (mut puzzle, ..) = sample();
        let removed = puzzle.block_cell(Position::new(2, 2)).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(puzzle.words().is_empty());
        assert!(!puzzle.grid().has_words());
        assert!(puzzle.grid().get(Position::new(2, 2)).unwrap().is_blocked());
    }

    #[test]
    fn test_renumber_uses_reading_order() {
        let mut puzzle = Puzzle::new(9, 9).unwrap();
        let late = puzzle
            .add_word("stone", "", Direction::Horizontal, Position::new(4, 2))
            .unwrap();
        let early = puzzle
            .add_word("tones", "", Direction::Vertical, Position::new(3, 4))
            .unwrap();
        assert_eq!(puzzle.word(late).unwrap().number(), Some(1));
        assert_eq!(puzzle.word(early).unwrap().number(), Some(2));

        puzzle.renumber();
        assert_eq!(puzzle.word(early).unwrap().number(), Some(1));
        assert_eq!(puzzle.word(late).unwrap().number(), Some(2));
        let down = puzzle.down();
        assert_eq!(down[0].id(), early);
    }

    #[test]
    fn test_statistics() {
        let (puzzle, ..) = sample();
        let stats = puzzle.statistics();
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.filled_cells, 5);
        assert_eq!(stats.intersections, 1);
        assert!(stats.mean_difficulty > 0.0);
    }
}
