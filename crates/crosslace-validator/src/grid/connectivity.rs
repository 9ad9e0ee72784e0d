use std::collections::VecDeque;

use crosslace_core::{Grid, Position};

use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "connectivity";

/// Groups filled cells into 4-connected components.
///
/// Traversal uses an explicit queue, so grid size is bounded by memory rather than stack
/// depth. Components are returned in row-major order of their first cell, each listing its
/// cells in discovery order.
///
/// # Examples
///
/// ```
/// use crosslace_core::{CellEntry, Direction, Grid, Position, WordId};
/// use crosslace_validator::grid::connected_components;
///
/// let mut grid = Grid::new(5, 5)?;
/// for pos in [Position::new(0, 0), Position::new(0, 1), Position::new(4, 4)] {
///     grid.get_mut(pos)?.attach('A', CellEntry {
///         word_id: WordId::new(1),
///         direction: Direction::Horizontal,
///         is_start: false,
///         is_end: false,
///     });
/// }
/// let components = connected_components(&grid);
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[0].len(), 2);
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
#[must_use]
pub fn connected_components(grid: &Grid) -> Vec<Vec<Position>> {
    let is_filled = |pos: Position| grid.get(pos).is_ok_and(|cell| cell.is_filled());
    let mut seen = vec![false; grid.area()];
    let index = |pos: Position| pos.row * grid.width() + pos.col;

    let mut components = Vec::new();
    for start in grid.positions() {
        if seen[index(start)] || !is_filled(start) {
            continue;
        }
        seen[index(start)] = true;
        let mut component = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(pos) = queue.pop_front() {
            component.push(pos);
            for next in pos.neighbors() {
                if grid.contains(next) && !seen[index(next)] && is_filled(next) {
                    seen[index(next)] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Reports a puzzle split into several connected masses.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnectivityCheck;

impl ConnectivityCheck {
    /// Creates a new `ConnectivityCheck`.
    #[must_use]
    pub const fn new() -> Self {
        ConnectivityCheck
    }
}

impl GridCheck for ConnectivityCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedGridCheck {
        Box::new(*self)
    }

    fn run(
        &self,
        input: &CheckInput<'_>,
        analysis: &mut GridAnalysis,
    ) -> Result<(), ValidationError> {
        let components = connected_components(input.grid);
        analysis.details_mut().components = components.len();
        if components.len() > 1 {
            let sizes: Vec<String> = components.iter().map(|c| c.len().to_string()).collect();
            analysis.report(
                Finding::new(
                    FindingKind::Disconnected,
                    Severity::Warning,
                    format!(
                        "filled cells form {} separate groups (sizes {})",
                        components.len(),
                        sizes.join(", ")
                    ),
                )
                .at(components[1][0]),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crosslace_core::{Direction, WordCollection};

    use super::*;
    use crate::{
        Strictness,
        grid::test_util::{inject, puzzle, run},
    };

    fn check() -> BoxedGridCheck {
        Box::new(ConnectivityCheck::new())
    }

    #[test]
    fn test_empty_grid_has_no_components() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(connected_components(&grid).is_empty());
        let analysis = run(&check(), &grid, &WordCollection::new());
        assert_eq!(analysis.details().components, 0);
        assert!(analysis.findings().is_empty());
    }

    #[test]
    fn test_crossing_words_are_one_component() {
        let (grid, words) = puzzle(
            7,
            7,
            &[
                ("CAT", 2, 2, Direction::Horizontal),
                ("CAR", 2, 2, Direction::Vertical),
            ],
        );
        assert_eq!(connected_components(&grid).len(), 1);
        assert!(run(&check(), &grid, &words).findings().is_empty());
    }

    #[test]
    fn test_two_separate_words_are_two_components() {
        let (mut grid, mut words) = puzzle(9, 9, &[("CAT", 0, 0, Direction::Horizontal)]);
        inject(&mut grid, &mut words, "DOG", 6, 4, Direction::Vertical);

        let components = connected_components(&grid);
        assert_eq!(components.len(), 2);
        assert_eq!(components[1][0], Position::new(6, 4));

        let analysis = run(&check(), &grid, &words);
        assert_eq!(analysis.details().components, 2);
        assert_eq!(
            analysis.findings().severity_of(FindingKind::Disconnected),
            Some(Severity::Warning)
        );
        assert_eq!(
            Strictness::Strict.classify(FindingKind::Disconnected, Severity::Warning),
            Severity::Error
        );
    }

    #[test]
    fn test_adjacent_words_touch() {
        let (mut grid, mut words) = puzzle(7, 7, &[("CAT", 0, 0, Direction::Horizontal)]);
        inject(&mut grid, &mut words, "DOG", 1, 0, Direction::Horizontal);
        assert_eq!(connected_components(&grid).len(), 1);
    }

    #[test]
    fn test_large_snake_does_not_overflow() {
        let mut grid = Grid::new(25, 25).unwrap();
        let mut words = WordCollection::new();
        for row in (0..25).step_by(2) {
            inject(&mut grid, &mut words, &"A".repeat(25), row, 0, Direction::Horizontal);
        }
        for row in (1..25).step_by(4) {
            inject(&mut grid, &mut words, "AAA", row - 1, 24, Direction::Vertical);
        }
        for row in (3..25).step_by(4) {
            inject(&mut grid, &mut words, "AAA", row - 1, 0, Direction::Vertical);
        }
        let components = connected_components(&grid);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 13 * 25 + 12);
    }
}
