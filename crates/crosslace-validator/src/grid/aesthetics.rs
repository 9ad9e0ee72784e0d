use std::ops::Range;

use crosslace_core::Grid;

use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "aesthetics";

/// Balance below which the filled cells are considered lopsided.
const IMBALANCED: f64 = 0.75;

/// Returns `1 - |TL + BR - TR - BL| / area` over filled cells.
///
/// On an odd dimension the middle row or column belongs to no quadrant. Since the diagonal
/// quadrants together cover at most half of the grid, a filled grid stays within `[0.5, 1]`;
/// an empty one is perfectly balanced.
///
/// # Examples
///
/// ```
/// use crosslace_core::{CellEntry, Direction, Grid, Position, WordId};
/// use crosslace_validator::grid::quadrant_balance;
///
/// let mut grid = Grid::new(6, 6)?;
/// assert_eq!(quadrant_balance(&grid), 1.0);
///
/// for col in 0..3 {
///     grid.get_mut(Position::new(0, col))?.attach('A', CellEntry {
///         word_id: WordId::new(1),
///         direction: Direction::Horizontal,
///         is_start: col == 0,
///         is_end: col == 2,
///     });
/// }
/// assert!((quadrant_balance(&grid) - (1.0 - 3.0 / 36.0)).abs() < 1e-9);
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn quadrant_balance(grid: &Grid) -> f64 {
    if grid.area() == 0 {
        return 1.0;
    }
    let (height, width) = (grid.height(), grid.width());
    let (top, bottom) = (height / 2, height.div_ceil(2));
    let (left, right) = (width / 2, width.div_ceil(2));

    let mut diagonal = 0_i64;
    for (pos, _) in grid.cells().filter(|(_, cell)| cell.is_filled()) {
        let vertical = if pos.row < top {
            1
        } else if pos.row >= bottom {
            -1
        } else {
            continue;
        };
        let horizontal = if pos.col < left {
            1
        } else if pos.col >= right {
            -1
        } else {
            continue;
        };
        diagonal += vertical * horizontal;
    }
    1.0 - diagonal.unsigned_abs() as f64 / grid.area() as f64
}

/// Returns the row and column ranges of the middle 50% x 50% region.
///
/// Each range starts a quarter of the way in and spans half the dimension, rounded up.
///
/// # Examples
///
/// ```
/// use crosslace_core::Grid;
/// use crosslace_validator::grid::center_region;
///
/// let grid = Grid::new(9, 5)?;
/// assert_eq!(center_region(&grid), (1..4, 2..7));
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
#[must_use]
pub fn center_region(grid: &Grid) -> (Range<usize>, Range<usize>) {
    let span = |len: usize| {
        let start = len / 4;
        start..(start + len.div_ceil(2)).min(len)
    };
    (span(grid.height()), span(grid.width()))
}

/// Quadrant balance and center fill of the filled cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct AestheticsCheck;

impl AestheticsCheck {
    /// Creates a new `AestheticsCheck`.
    #[must_use]
    pub const fn new() -> Self {
        AestheticsCheck
    }
}

impl GridCheck for AestheticsCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedGridCheck {
        Box::new(*self)
    }

    #[expect(clippy::cast_precision_loss)]
    fn run(
        &self,
        input: &CheckInput<'_>,
        analysis: &mut GridAnalysis,
    ) -> Result<(), ValidationError> {
        let grid = input.grid;
        let balance = ValidationError::finite("quadrant_balance", quadrant_balance(grid))?;

        let (rows, cols) = center_region(grid);
        let region = rows.len() * cols.len();
        let center_fill = if region == 0 {
            0.0
        } else {
            let filled = grid
                .cells()
                .filter(|(pos, cell)| {
                    rows.contains(&pos.row) && cols.contains(&pos.col) && cell.is_filled()
                })
                .count();
            ValidationError::finite("center_fill", filled as f64 / region as f64)?
        };

        let details = analysis.details_mut();
        details.quadrant_balance = balance;
        details.center_fill = center_fill;

        if balance < IMBALANCED {
            analysis.report(Finding::new(
                FindingKind::QuadrantImbalance,
                Severity::Suggestion,
                format!("filled cells favor one diagonal (balance {balance:.2})"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crosslace_core::{Direction, WordCollection};

    use super::*;
    use crate::grid::test_util::{inject, puzzle, run};

    fn check() -> BoxedGridCheck {
        Box::new(AestheticsCheck::new())
    }

    #[test]
    fn test_center_region() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(center_region(&grid), (1..4, 1..4));
        let grid = Grid::new(8, 25).unwrap();
        assert_eq!(center_region(&grid), (6..19, 2..6));
    }

    #[test]
    fn test_balanced_cross() {
        let (grid, words) = puzzle(
            7,
            7,
            &[
                ("ALONG", 3, 1, Direction::Horizontal),
                ("BLOCK", 1, 3, Direction::Vertical),
            ],
        );
        let analysis = run(&check(), &grid, &words);
        let details = analysis.details();
        assert!((details.quadrant_balance - 1.0).abs() < 1e-9);
        assert!((details.center_fill - 7.0 / 16.0).abs() < 1e-9);
        assert!(analysis.findings().is_empty());
    }

    #[test]
    fn test_diagonal_quadrants_are_imbalanced() {
        let mut grid = Grid::new(6, 6).unwrap();
        let mut words = WordCollection::new();
        for row in 0..3 {
            inject(&mut grid, &mut words, "AAA", row, 0, Direction::Horizontal);
            inject(&mut grid, &mut words, "AAA", row + 3, 3, Direction::Horizontal);
        }
        assert!((quadrant_balance(&grid) - 0.5).abs() < 1e-9);

        let analysis = run(&check(), &grid, &words);
        assert_eq!(
            analysis.findings().severity_of(FindingKind::QuadrantImbalance),
            Some(Severity::Suggestion)
        );
        // Four center cells from the top-left quadrant, one from the bottom-right.
        assert!((analysis.details().center_fill - 5.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_area_grid() {
        let grid = Grid::from_rows(Vec::new()).unwrap();
        let analysis = run(&check(), &grid, &WordCollection::new());
        assert!((analysis.details().quadrant_balance - 1.0).abs() < 1e-9);
        assert!(analysis.details().center_fill.abs() < 1e-9);
    }
}
