use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "density";

/// Share of filled and blocked cells.
///
/// Density is `filled / area`; outside the configured band it draws a warning, as does a
/// blocked ratio above the ceiling. An empty (zero-area) grid has density 0 and no findings
/// here; the structure check reports its dimensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DensityCheck;

impl DensityCheck {
    /// Creates a new `DensityCheck`.
    #[must_use]
    pub const fn new() -> Self {
        DensityCheck
    }
}

impl GridCheck for DensityCheck {
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
        let (mut filled, mut blocked) = (0, 0);
        for (_, cell) in grid.cells() {
            filled += usize::from(cell.is_filled());
            blocked += usize::from(cell.is_blocked());
        }
        let details = analysis.details_mut();
        details.filled_cells = filled;
        details.blocked_cells = blocked;
        if grid.area() == 0 {
            return Ok(());
        }

        let area = grid.area() as f64;
        let density = ValidationError::finite("density", filled as f64 / area)?;
        let blocked_ratio = ValidationError::finite("blocked_ratio", blocked as f64 / area)?;
        details.density = density;
        details.blocked_ratio = blocked_ratio;

        if density < config.min_density {
            analysis.report(Finding::new(
                FindingKind::LowDensity,
                Severity::Warning,
                format!("density {density:.2} is below {:.2}", config.min_density),
            ));
        } else if density > config.max_density {
            analysis.report(Finding::new(
                FindingKind::HighDensity,
                Severity::Warning,
                format!("density {density:.2} is above {:.2}", config.max_density),
            ));
        }
        if blocked_ratio > config.max_blocked_ratio {
            analysis.report(Finding::new(
                FindingKind::ExcessiveBlockedCells,
                Severity::Warning,
                format!(
                    "{:.0}% of cells are blocked, more than {:.0}%",
                    blocked_ratio * 100.0,
                    config.max_blocked_ratio * 100.0
                ),
            ));
        }
        Ok(())
    }
}
