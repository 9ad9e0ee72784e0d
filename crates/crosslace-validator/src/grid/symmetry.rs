use crosslace_core::{Grid, Position};

use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "symmetry";

/// Ratio below which both axes must fall for a suggestion.
const LOW_SYMMETRY: f64 = 0.5;

#[expect(clippy::cast_precision_loss)]
fn match_ratio(grid: &Grid, mirror: impl Fn(Position) -> Position) -> f64 {
    if grid.area() == 0 {
        return 1.0;
    }
    let blocked = |pos: Position| grid.get(pos).is_ok_and(|cell| cell.is_blocked());
    let matches = grid
        .positions()
        .filter(|&pos| blocked(pos) == blocked(mirror(pos)))
        .count();
    matches as f64 / grid.area() as f64
}

/// Share of cells whose blocked flag matches the cell mirrored across the horizontal axis
/// (row `r` against row `height - 1 - r`).
///
/// An empty grid is fully symmetric.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, Position};
/// use crosslace_validator::grid::horizontal_symmetry;
///
/// let mut grid = Grid::new(5, 5)?;
/// assert_eq!(horizontal_symmetry(&grid), 1.0);
///
/// grid.block(Position::new(0, 0))?;
/// assert!((horizontal_symmetry(&grid) - 23.0 / 25.0).abs() < 1e-9);
///
/// grid.block(Position::new(4, 0))?;
/// assert_eq!(horizontal_symmetry(&grid), 1.0);
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
#[must_use]
pub fn horizontal_symmetry(grid: &Grid) -> f64 {
    let height = grid.height();
    match_ratio(grid, |pos| Position::new(height - 1 - pos.row, pos.col))
}

/// Share of cells whose blocked flag matches the cell mirrored across the vertical axis
/// (column `c` against column `width - 1 - c`).
#[must_use]
pub fn vertical_symmetry(grid: &Grid) -> f64 {
    let width = grid.width();
    match_ratio(grid, |pos| Position::new(pos.row, width - 1 - pos.col))
}

/// Mirror symmetry of the blocked-cell pattern on both axes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymmetryCheck;

impl SymmetryCheck {
    /// Creates a new `SymmetryCheck`.
    #[must_use]
    pub const fn new() -> Self {
        SymmetryCheck
    }
}

impl GridCheck for SymmetryCheck {
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
        let horizontal =
            ValidationError::finite("horizontal_symmetry", horizontal_symmetry(input.grid))?;
        let vertical = ValidationError::finite("vertical_symmetry", vertical_symmetry(input.grid))?;
        let details = analysis.details_mut();
        details.horizontal_symmetry = horizontal;
        details.vertical_symmetry = vertical;

        if horizontal < LOW_SYMMETRY && vertical < LOW_SYMMETRY {
            analysis.report(Finding::new(
                FindingKind::LowSymmetry,
                Severity::Suggestion,
                format!(
                    "blocked cells are asymmetric (horizontal {horizontal:.2}, vertical {vertical:.2})"
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crosslace_core::WordCollection;

    use super::*;
    use crate::grid::test_util::run;

    fn check() -> BoxedGridCheck {
        Box::new(SymmetryCheck::new())
    }

    #[test]
    fn test_open_grid_is_symmetric() {
        let grid = Grid::new(7, 5).unwrap();
        assert!((horizontal_symmetry(&grid) - 1.0).abs() < 1e-9);
        assert!((vertical_symmetry(&grid) - 1.0).abs() < 1e-9);
        let analysis = run(&check(), &grid, &WordCollection::new());
        assert!(analysis.findings().is_empty());
    }

    #[test]
    fn test_axes_are_independent() {
        let mut grid = Grid::new(5, 5).unwrap();
        // Both top corners.
        grid.block(Position::new(0, 0)).unwrap();
        grid.block(Position::new(0, 4)).unwrap();
        assert!((vertical_symmetry(&grid) - 1.0).abs() < 1e-9);
        assert!((horizontal_symmetry(&grid) - 21.0 / 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_symmetry_suggestion() {
        let mut grid = Grid::new(6, 6).unwrap();
        // Top-right and bottom-left quadrants blocked.
        for pos in grid.positions() {
            if (pos.row < 3) != (pos.col < 3) {
                grid.block(pos).unwrap();
            }
        }
        let analysis = run(&check(), &grid, &WordCollection::new());
        let details = analysis.details();
        assert!(details.horizontal_symmetry.abs() < 1e-9);
        assert!(details.vertical_symmetry.abs() < 1e-9);
        assert_eq!(
            analysis.findings().severity_of(FindingKind::LowSymmetry),
            Some(Severity::Suggestion)
        );
    }
}
