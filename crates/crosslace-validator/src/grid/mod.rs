//! Grid quality validation.
//!
//! Each aspect of a grid is inspected by a [`GridCheck`]. Checks read the grid and words,
//! file findings and fill in their part of [`GridDetails`]; the [`GridQualityValidator`]
//! runs them in order, scores the result and caches it by content.

use std::fmt::Debug;

use crosslace_core::{Grid, WordCollection};

pub use self::{
    aesthetics::{AestheticsCheck, center_region, quadrant_balance},
    connectivity::{ConnectivityCheck, connected_components},
    density::DensityCheck,
    intersections::IntersectionCheck,
    placement::PlacementCheck,
    structure::StructureCheck,
    symmetry::{SymmetryCheck, horizontal_symmetry, vertical_symmetry},
    validator::GridQualityValidator,
};
use crate::{Finding, Findings, GridDetails, Strictness, ValidationError, ValidatorConfig};

mod aesthetics;
mod connectivity;
mod density;
mod intersections;
mod placement;
mod structure;
mod symmetry;
mod validator;

/// Returns every grid check, in the order the validator runs them.
///
/// # Examples
///
/// ```
/// use crosslace_validator::grid;
///
/// let names: Vec<_> = grid::all_checks().iter().map(|check| check.name()).collect();
/// assert_eq!(names[0], "structure");
/// assert_eq!(names.len(), 7);
/// ```
#[must_use]
pub fn all_checks() -> Vec<BoxedGridCheck> {
    vec![
        Box::new(StructureCheck::new()),
        Box::new(PlacementCheck::new()),
        Box::new(IntersectionCheck::new()),
        Box::new(ConnectivityCheck::new()),
        Box::new(DensityCheck::new()),
        Box::new(SymmetryCheck::new()),
        Box::new(AestheticsCheck::new()),
    ]
}

/// One aspect of grid validation.
pub trait GridCheck: Debug + Send + Sync {
    /// Returns the name of the check.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the check.
    fn clone_box(&self) -> BoxedGridCheck;

    /// Inspects the input and records findings and metrics in `analysis`.
    ///
    /// # Errors
    ///
    /// Returns an error on an internal failure; problems with the puzzle itself are findings,
    /// not errors.
    fn run(
        &self,
        input: &CheckInput<'_>,
        analysis: &mut GridAnalysis,
    ) -> Result<(), ValidationError>;
}

/// A boxed grid check.
pub type BoxedGridCheck = Box<dyn GridCheck>;

impl Clone for BoxedGridCheck {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// What a check inspects.
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    /// The grid.
    pub grid: &'a Grid,
    /// The words placed on it.
    pub words: &'a WordCollection,
    /// Thresholds.
    pub config: &'a ValidatorConfig,
}

/// Findings and metrics accumulated while checks run.
#[derive(Debug, Clone, Default)]
pub struct GridAnalysis {
    strictness: Strictness,
    findings: Findings,
    details: GridDetails,
}

impl GridAnalysis {
    /// Creates an empty analysis classifying findings at `strictness`.
    #[must_use]
    pub fn new(strictness: Strictness) -> Self {
        Self {
            strictness,
            findings: Findings::default(),
            details: GridDetails::default(),
        }
    }

    /// Records a finding, adjusting its severity to the strictness level.
    pub fn report(&mut self, finding: Finding) {
        let severity = self.strictness.classify(finding.kind, finding.severity);
        self.findings.push(Finding { severity, ..finding });
    }

    /// Returns the findings so far.
    #[must_use]
    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    /// Returns the metrics so far.
    #[must_use]
    pub fn details(&self) -> &GridDetails {
        &self.details
    }

    /// Returns the metrics for updating.
    pub fn details_mut(&mut self) -> &mut GridDetails {
        &mut self.details
    }

    /// Splits the analysis into findings and metrics.
    #[must_use]
    pub fn into_parts(self) -> (Findings, GridDetails) {
        (self.findings, self.details)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FindingKind, Severity};

    #[test]
    fn test_checks_are_cloneable_and_unique() {
        let checks = all_checks();
        let cloned = checks.clone();
        let names: Vec<_> = cloned.iter().map(|check| check.name()).collect();
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_analysis_applies_strictness() {
        let mut analysis = GridAnalysis::new(Strictness::Strict);
        analysis.report(Finding::new(FindingKind::Disconnected, Severity::Warning, "two islands"));
        analysis.report(Finding::new(FindingKind::LowDensity, Severity::Warning, "sparse"));
        let findings = analysis.findings();
        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.warnings.len(), 1);
        assert_eq!(findings.errors[0].severity, Severity::Error);
    }
}
