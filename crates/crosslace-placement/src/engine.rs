use crosslace_core::{CellEntry, Grid, Position, Word, WordId};

use crate::{PlacementError, can_place};

/// The effect of a committed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Clue number of the word's start cell.
    pub number: u32,
    /// Cells the word shares with earlier words.
    pub intersections: Vec<Position>,
}

/// Writes `word` into the grid.
///
/// The legality check runs first; on rejection nothing is modified. On success every cell of
/// the slot gets the letter and an occupancy entry for the word, the first cell is marked as
/// start and receives a clue number (reusing the number already there when another word
/// starts on the same cell), and the last cell is marked as end.
///
/// # Errors
///
/// Returns [`PlacementError::IllegalPlacement`] when [`can_place`] rejects the word.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Direction, Grid, Position, Word, WordId};
/// use crosslace_placement::place;
///
/// let mut grid = Grid::new(7, 7)?;
/// let cat = Word::new(WordId::new(1), "CAT", "Pet", Direction::Horizontal, Position::new(2, 2))?;
/// let car = Word::new(WordId::new(2), "CAR", "Vehicle", Direction::Vertical, Position::new(2, 2))?;
///
/// place(&mut grid, &cat)?;
/// let placement = place(&mut grid, &car)?;
/// assert_eq!(placement.number, 1);
/// assert!(grid.get(Position::new(2, 2))?.is_intersection());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn place(grid: &mut Grid, word: &Word) -> Result<Placement, PlacementError> {
    let intersections = can_place(grid, word.text(), word.start(), word.direction())
        .inspect_err(|rejection| {
            log::debug!("rejected {} at {}: {rejection}", word.text(), word.start());
        })?;

    let last = word.len() - 1;
    for (offset, (position, letter)) in word.cells().enumerate() {
        grid.get_mut(position)?.attach(
            letter,
            CellEntry {
                word_id: word.id(),
                direction: word.direction(),
                is_start: offset == 0,
                is_end: offset == last,
            },
        );
    }

    let number = match grid.get(word.start())?.number() {
        Some(number) => number,
        None => {
            let number = grid.allocate_number();
            grid.get_mut(word.start())?.set_number(Some(number));
            number
        }
    };

    Ok(Placement {
        number,
        intersections,
    })
}

/// Retracts every reference to `word_id` from the grid.
///
/// Cells left without words lose their letter and number; shared cells keep the letter and
/// derive their flags from the remaining words. Returns `false` if no cell referenced the id.
pub fn remove(grid: &mut Grid, word_id: WordId) -> bool {
    let mut removed = false;
    for (_, cell) in grid.cells_mut() {
        removed |= cell.detach(word_id);
    }
    removed
}

#[cfg(test)]
mod tests {
    use crosslace_core::Direction;
    use proptest::prelude::*;

    use super::*;
    use crate::{PlacementRejection, testing::PlacementTester};

    fn word(id: u32, text: &str, row: usize, col: usize, direction: Direction) -> Word {
        Word::new(WordId::new(id), text, "", direction, Position::new(row, col)).unwrap()
    }

    #[test]
    fn test_place_marks_start_end_and_number() {
        let mut grid = Grid::new(7, 7).unwrap();
        let placement = place(&mut grid, &word(1, "CAT", 1, 1, Direction::Horizontal)).unwrap();
        assert_eq!(placement.number, 1);
        assert!(placement.intersections.is_empty());

        let start = grid.get(Position::new(1, 1)).unwrap();
        assert!(start.is_start());
        assert_eq!(start.number(), Some(1));
        assert!(grid.get(Position::new(1, 3)).unwrap().is_end());
        assert_eq!(grid.get(Position::new(1, 2)).unwrap().letter(), Some('A'));
    }

    #[test]
    fn test_valid_intersection() {
        PlacementTester::new(7, 7)
            .place("CAT", 2, 2, Direction::Horizontal)
            .place("CAR", 2, 2, Direction::Vertical)
            .assert_intersection(2, 2)
            .assert_word_ids(2, 2, &["CAT", "CAR"])
            .assert_number(2, 2, Some(1));
    }

    #[test]
    fn test_numbers_are_monotonic_and_not_renumbered() {
        let mut grid = Grid::new(9, 9).unwrap();
        place(&mut grid, &word(1, "CAT", 4, 2, Direction::Horizontal)).unwrap();
        place(&mut grid, &word(2, "DOG", 3, 2, Direction::Vertical)).unwrap_err();
        place(&mut grid, &word(3, "ACT", 4, 3, Direction::Vertical)).unwrap();
        place(&mut grid, &word(4, "TOE", 4, 4, Direction::Vertical)).unwrap();
        assert_eq!(grid.get(Position::new(4, 3)).unwrap().number(), Some(2));
        assert_eq!(grid.get(Position::new(4, 4)).unwrap().number(), Some(3));

        assert!(remove(&mut grid, WordId::new(3)));
        assert_eq!(grid.get(Position::new(4, 3)).unwrap().number(), None);
        assert_eq!(grid.get(Position::new(4, 4)).unwrap().number(), Some(3));
    }

    #[test]
    fn test_illegal_placement_leaves_grid_untouched() {
        let mut grid = Grid::new(7, 7).unwrap();
        place(&mut grid, &word(1, "CAT", 0, 0, Direction::Horizontal)).unwrap();
        let before = grid.clone();
        let result = place(&mut grid, &word(2, "DOG", 0, 0, Direction::Horizontal));
        assert!(matches!(
            result,
            Err(PlacementError::IllegalPlacement(
                PlacementRejection::LetterConflict { .. }
            ))
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_remove_unknown_id_is_not_an_error() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(!remove(&mut grid, WordId::new(9)));
    }

    #[test]
    fn test_remove_crossing_word_restores_shared_cell() {
        let mut grid = Grid::new(7, 7).unwrap();
        place(&mut grid, &word(1, "CAT", 2, 2, Direction::Horizontal)).unwrap();
        let before = grid.clone();
        place(&mut grid, &word(2, "TOP", 2, 4, Direction::Vertical)).unwrap();
        assert!(remove(&mut grid, WordId::new(2)));
        assert_eq!(grid.get(Position::new(2, 4)), before.get(Position::new(2, 4)));
        assert_eq!(grid.get(Position::new(3, 4)).unwrap().letter(), None);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_place_then_remove_round_trips(
            first in "[A-Z]{2,7}",
            second in "[A-Z]{2,7}",
            first_dir in direction(),
            row in 0usize..9,
            col in 0usize..9,
            i in 0usize..7,
            j in 0usize..7,
        ) {
            let mut grid = Grid::new(9, 9).unwrap();
            let (row, col) = match first_dir {
                Direction::Horizontal => (row, col % (10 - first.len())),
                Direction::Vertical => (row % (10 - first.len()), col),
            };
            let first = word(1, &first, row, col, first_dir);
            place(&mut grid, &first).unwrap();

            // Force the second word to share letter `j` of the first at its offset `i`.
            let j = j % first.len();
            let i = i % second.len();
            let mut second: Vec<u8> = second.into_bytes();
            second[i] = first.text().as_bytes()[j];
            let second = String::from_utf8(second).unwrap();
            let anchor = match first_dir {
                Direction::Horizontal => row.checked_sub(i).map(|r| Position::new(r, col + j)),
                Direction::Vertical => col.checked_sub(i).map(|c| Position::new(row + j, c)),
            };
            let anchor = anchor.unwrap_or(Position::new(0, 0));
            let second = Word::new(WordId::new(2), &second, "", first_dir.perpendicular(), anchor)
                .unwrap();

            let before = grid.clone();
            if place(&mut grid, &second).is_ok() {
                prop_assert!(remove(&mut grid, second.id()));
                // The number counter keeps running; compare cells only.
                prop_assert!(grid.cells().zip(before.cells()).all(|(a, b)| a == b));
            } else {
                prop_assert_eq!(grid, before);
            }
        }
    }
}
