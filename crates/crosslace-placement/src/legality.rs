pub use crosslace_core::MIN_WORD_LEN;
use crosslace_core::{Direction, Grid, Position};

use crate::PlacementRejection;

/// Checks whether `text` may be written at `start` along `direction`, without mutating the
/// grid.
///
/// On success returns the positions where the word would cross letters already in the grid.
/// Letters are compared case-insensitively; callers normally pass normalized answers.
///
/// The checks run in a fixed order and the first failure wins:
///
/// 1. the answer has at least [`MIN_WORD_LEN`] letters and the anchor is in bounds;
/// 2. every letter lands in bounds;
/// 3. no letter lands on a blocked cell;
/// 4. the word is not entirely made of existing, matching letters;
/// 5. no cell holds a different letter;
/// 6. once the grid holds a word, the candidate crosses at least one letter.
///
/// # Errors
///
/// Returns the [`PlacementRejection`] describing the first failed check.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Direction, Grid, Position};
/// use crosslace_placement::{PlacementRejection, can_place};
///
/// let grid = Grid::new(5, 5)?;
/// assert_eq!(can_place(&grid, "CAT", Position::new(0, 0), Direction::Horizontal), Ok(vec![]));
/// assert!(matches!(
///     can_place(&grid, "CATS", Position::new(0, 2), Direction::Horizontal),
///     Err(PlacementRejection::OutOfBounds { .. })
/// ));
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
pub fn can_place(
    grid: &Grid,
    text: &str,
    start: Position,
    direction: Direction,
) -> Result<Vec<Position>, PlacementRejection> {
    let len = text.chars().count();
    if len < MIN_WORD_LEN {
        return Err(PlacementRejection::TooShort { len });
    }
    if !grid.contains(start) {
        return Err(PlacementRejection::OutOfBounds { position: start });
    }

    let mut slot = Vec::with_capacity(len);
    for (offset, ch) in text.chars().enumerate() {
        let position = start
            .step(direction, offset)
            .filter(|pos| grid.contains(*pos))
            .ok_or_else(|| PlacementRejection::OutOfBounds {
                position: overflow_position(start, direction, offset),
            })?;
        slot.push((position, ch.to_ascii_uppercase()));
    }

    let mut cells = Vec::with_capacity(len);
    for &(position, ch) in &slot {
        let cell = grid
            .get(position)
            .map_err(|_| PlacementRejection::OutOfBounds { position })?;
        if cell.is_blocked() {
            return Err(PlacementRejection::Blocked { position });
        }
        cells.push((position, ch, cell.letter()));
    }

    let mut intersections = Vec::new();
    let mut conflict = None;
    for (position, proposed, existing) in cells {
        match existing {
            Some(existing) if existing == proposed => intersections.push(position),
            Some(existing) => {
                conflict.get_or_insert(PlacementRejection::LetterConflict {
                    position,
                    existing,
                    proposed,
                });
            }
            None => {}
        }
    }

    if intersections.len() == len {
        return Err(PlacementRejection::FullDuplicate);
    }
    if let Some(conflict) = conflict {
        return Err(conflict);
    }
    if intersections.is_empty() && grid.has_words() {
        return Err(PlacementRejection::Isolated);
    }
    Ok(intersections)
}

fn overflow_position(start: Position, direction: Direction, offset: usize) -> Position {
    start.step(direction, offset).unwrap_or(match direction {
        Direction::Horizontal => Position::new(start.row, usize::MAX),
        Direction::Vertical => Position::new(usize::MAX, start.col),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PlacementTester;

    #[test]
    fn test_rejects_short_words_and_bad_anchor() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(
            can_place(&grid, "A", Position::new(0, 0), Direction::Horizontal),
            Err(PlacementRejection::TooShort { len: 1 })
        );
        assert_eq!(
            can_place(&grid, "AT", Position::new(5, 0), Direction::Horizontal),
            Err(PlacementRejection::OutOfBounds {
                position: Position::new(5, 0)
            })
        );
    }

    #[test]
    fn test_reports_first_cell_out_of_bounds() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(
            can_place(&grid, "HELLO", Position::new(3, 1), Direction::Vertical),
            Err(PlacementRejection::OutOfBounds {
                position: Position::new(5, 1)
            })
        );
    }

    #[test]
    fn test_rejects_blocked_cell() {
        PlacementTester::new(5, 5)
            .block(0, 2)
            .assert_rejected("CAT", 0, 0, Direction::Horizontal, PlacementRejection::is_blocked);
    }

    #[test]
    fn test_letter_conflict() {
        PlacementTester::new(7, 7)
            .place("CAT", 0, 0, Direction::Horizontal)
            .assert_rejected(
                "DOG",
                0,
                0,
                Direction::Horizontal,
                PlacementRejection::is_letter_conflict,
            );
    }

    #[test]
    fn test_full_duplicate() {
        PlacementTester::new(7, 7)
            .place("CAT", 2, 2, Direction::Horizontal)
            .assert_rejected(
                "CAT",
                2,
                2,
                Direction::Horizontal,
                PlacementRejection::is_full_duplicate,
            )
            .assert_rejected(
                "AT",
                2,
                3,
                Direction::Horizontal,
                PlacementRejection::is_full_duplicate,
            );
    }

    #[test]
    fn test_isolation_rule() {
        PlacementTester::new(7, 7)
            .place("CAT", 0, 0, Direction::Horizontal)
            .assert_rejected(
                "DOG",
                4,
                0,
                Direction::Horizontal,
                PlacementRejection::is_isolated,
            );
    }

    #[test]
    fn test_first_word_needs_no_intersection() {
        let grid = Grid::new(9, 9).unwrap();
        assert_eq!(
            can_place(&grid, "PUZZLE", Position::new(8, 0), Direction::Horizontal),
            Ok(vec![])
        );
    }

    #[test]
    fn test_returns_intersections() {
        let tester = PlacementTester::new(7, 7).place("CAT", 2, 2, Direction::Horizontal);
        assert_eq!(
            can_place(tester.grid(), "car", Position::new(2, 2), Direction::Vertical),
            Ok(vec![Position::new(2, 2)])
        );
    }
}
