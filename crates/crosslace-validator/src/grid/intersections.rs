use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "intersections";

/// Counts shared cells and reports words crossing nothing.
///
/// Isolation is only meaningful with more than one word; a lone word is never isolated.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionCheck;

impl IntersectionCheck {
    /// Creates a new `IntersectionCheck`.
    #[must_use]
    pub const fn new() -> Self {
        IntersectionCheck
    }
}

impl GridCheck for IntersectionCheck {
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
        let CheckInput { grid, words, .. } = *input;
        let intersections = grid
            .cells()
            .filter(|(_, cell)| cell.is_intersection())
            .count();
        analysis.details_mut().intersections = intersections;

        if words.len() < 2 {
            return Ok(());
        }
        for word in words {
            let mut crosses = false;
            for (pos, _) in word.cells().filter(|(pos, _)| grid.contains(*pos)) {
                if grid.get(pos)?.is_intersection() {
                    crosses = true;
                    break;
                }
            }
            if !crosses {
                analysis.details_mut().isolated_words.push(word.id());
                analysis.report(
                    Finding::new(
                        FindingKind::IsolatedWord,
                        Severity::Warning,
                        format!("{} crosses no other word", word.text()),
                    )
                    .for_word(word.id()),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crosslace_core::Direction;

    use super::*;
    use crate::grid::test_util::{inject, puzzle, run};

    fn check() -> BoxedGridCheck {
        Box::new(IntersectionCheck::new())
    }

    #[test]
    fn test_counts_intersections() {
        let (grid, words) = puzzle(
            9,
            9,
            &[
                ("STONE", 4, 2, Direction::Horizontal),
                ("TONES", 3, 4, Direction::Vertical),
                ("SNOT", 4, 2, Direction::Vertical),
            ],
        );
        let analysis = run(&check(), &grid, &words);
        assert_eq!(analysis.details().intersections, 2);
        assert!(analysis.details().isolated_words.is_empty());
        assert!(analysis.findings().is_empty());
    }

    #[test]
    fn test_lone_word_is_not_isolated() {
        let (grid, words) = puzzle(7, 7, &[("CAT", 0, 0, Direction::Horizontal)]);
        let analysis = run(&check(), &grid, &words);
        assert!(analysis.findings().is_empty());
    }

    #[test]
    fn test_isolated_word_reported() {
        let (mut grid, mut words) = puzzle(7, 7, &[("CAT", 0, 0, Direction::Horizontal)]);
        // The placement engine would refuse this one.
        inject(&mut grid, &mut words, "DOG", 5, 0, Direction::Horizontal);

        let analysis = run(&check(), &grid, &words);
        assert_eq!(analysis.details().isolated_words.len(), 2);
        assert_eq!(analysis.findings().warnings.len(), 2);
    }
}
