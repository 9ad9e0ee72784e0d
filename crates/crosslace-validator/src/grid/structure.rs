use crosslace_core::Grid;

use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "structure";

/// Dimensions, shape and per-cell consistency.
///
/// Reports non-rectangular grids and dimensions outside `[5, 25]` as errors, an extreme
/// aspect ratio or large area as warnings, and malformed cells (a blocked cell holding a
/// letter, number or word reference, a word reference without a letter, or a letter that is
/// not an uppercase ASCII letter) as errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructureCheck;

impl StructureCheck {
    /// Creates a new `StructureCheck`.
    #[must_use]
    pub const fn new() -> Self {
        StructureCheck
    }
}

impl GridCheck for StructureCheck {
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
        let CheckInput { grid, config, .. } = *input;
        let (width, height) = (grid.width(), grid.height());
        let details = analysis.details_mut();
        details.width = width;
        details.height = height;

        if !grid.is_rectangular() {
            analysis.report(Finding::new(
                FindingKind::NotRectangular,
                Severity::Error,
                "grid rows differ in length",
            ));
        }
        if !Grid::is_valid_dimension(width) || !Grid::is_valid_dimension(height) {
            analysis.report(Finding::new(
                FindingKind::InvalidDimensions,
                Severity::Error,
                format!(
                    "grid is {width}x{height}; each dimension must be within {}..={}",
                    Grid::MIN_DIMENSION,
                    Grid::MAX_DIMENSION
                ),
            ));
        }

        if width > 0 && height > 0 {
            let aspect = width.max(height) as f64 / width.min(height) as f64;
            if aspect > config.max_aspect_ratio {
                analysis.report(Finding::new(
                    FindingKind::ExtremeAspectRatio,
                    Severity::Warning,
                    format!("aspect ratio {aspect:.2} exceeds {:.2}", config.max_aspect_ratio),
                ));
            }
        }
        if grid.area() > config.max_area {
            analysis.report(Finding::new(
                FindingKind::LargeArea,
                Severity::Warning,
                format!("grid has {} cells, more than {}", grid.area(), config.max_area),
            ));
        }

        for (pos, cell) in grid.cells() {
            let problem = if cell.is_blocked()
                && (cell.letter().is_some() || cell.number().is_some() || !cell.entries().is_empty())
            {
                Some("blocked cell holds content".to_owned())
            } else if cell.letter().is_none() && !cell.entries().is_empty() {
                Some("cell is referenced by words but has no letter".to_owned())
            } else {
                cell.letter()
                    .filter(|ch| !ch.is_ascii_uppercase())
                    .map(|ch| format!("cell holds invalid letter {ch:?}"))
            };
            if let Some(message) = problem {
                analysis.report(
                    Finding::new(FindingKind::MalformedCell, Severity::Error, message).at(pos),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crosslace_core::{Cell, Position};

    use super::*;
    use crate::grid::test_util::run;

    fn check() -> BoxedGridCheck {
        Box::new(StructureCheck::new())
    }

    #[test]
    fn test_clean_grid_has_no_findings() {
        let grid = Grid::new(9, 9).unwrap();
        let analysis = run(&check(), &grid, &Default::default());
        assert!(analysis.findings().is_empty());
        assert_eq!(analysis.details().width, 9);
    }

    #[test]
    fn test_shape_findings() {
        let grid = Grid::new(25, 5).unwrap();
        let analysis = run(&check(), &grid, &Default::default());
        assert!(analysis.findings().contains(FindingKind::ExtremeAspectRatio));
        assert!(!analysis.findings().contains(FindingKind::LargeArea));

        let grid = Grid::new(25, 25).unwrap();
        let analysis = run(&check(), &grid, &Default::default());
        assert!(analysis.findings().contains(FindingKind::LargeArea));

        let grid = Grid::from_rows(vec![vec![Cell::new(); 3]; 3]).unwrap();
        let analysis = run(&check(), &grid, &Default::default());
        assert_eq!(
            analysis.findings().severity_of(FindingKind::InvalidDimensions),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_malformed_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        let blocked = grid.get_mut(Position::new(0, 0)).unwrap();
        blocked.block();
        blocked.set_letter(Some('A'));
        grid.get_mut(Position::new(1, 1)).unwrap().set_letter(Some('a'));

        let analysis = run(&check(), &grid, &Default::default());
        let positions: Vec<_> = analysis
            .findings()
            .errors
            .iter()
            .filter(|f| f.kind == FindingKind::MalformedCell)
            .map(|f| f.position)
            .collect();
        assert_eq!(
            positions,
            [Some(Position::new(0, 0)), Some(Position::new(1, 1))]
        );
    }
}
