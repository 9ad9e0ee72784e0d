use super::{BoxedGridCheck, CheckInput, GridAnalysis, GridCheck};
use crate::{Finding, FindingKind, Severity, ValidationError};

const NAME: &str = "placement";

/// Agreement between the word collection and the grid.
///
/// For each word: a span leaving the grid is an error (and the word's cells are not
/// inspected further), a span crossing a blocked cell or a cell with a different letter is an
/// error, and a cell that does not reference the word is a warning. Cell references to ids
/// missing from the collection are warnings too.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlacementCheck;

impl PlacementCheck {
    /// Creates a new `PlacementCheck`.
    #[must_use]
    pub const fn new() -> Self {
        PlacementCheck
    }
}

impl GridCheck for PlacementCheck {
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
        analysis.details_mut().word_count = words.len();

        for word in words {
            let id = word.id();
            let in_bounds = grid.contains(word.start())
                && word.end().is_some_and(|end| grid.contains(end));
            if !in_bounds {
                analysis.report(
                    Finding::new(
                        FindingKind::WordOutOfBounds,
                        Severity::Error,
                        format!("{} at {} leaves the grid", word.text(), word.start()),
                    )
                    .for_word(id),
                );
                continue;
            }

            for (pos, ch) in word.cells() {
                let cell = grid.get(pos)?;
                if cell.is_blocked() {
                    analysis.report(
                        Finding::new(
                            FindingKind::BlockedInWord,
                            Severity::Error,
                            format!("{} crosses a blocked cell", word.text()),
                        )
                        .at(pos)
                        .for_word(id),
                    );
                    continue;
                }
                if cell.letter() != Some(ch) {
                    let found = cell
                        .letter()
                        .map_or_else(|| "nothing".to_owned(), |letter| format!("{letter:?}"));
                    analysis.report(
                        Finding::new(
                            FindingKind::LetterMismatch,
                            Severity::Error,
                            format!("{} expects {ch:?} but the cell holds {found}", word.text()),
                        )
                        .at(pos)
                        .for_word(id),
                    );
                }
                if !cell.references(id) {
                    analysis.report(
                        Finding::new(
                            FindingKind::MissingWordReference,
                            Severity::Warning,
                            format!("cell does not reference {}", word.text()),
                        )
                        .at(pos)
                        .for_word(id),
                    );
                }
            }
        }

        for (pos, cell) in grid.cells() {
            for id in cell.word_ids().filter(|id| !words.contains(*id)) {
                analysis.report(
                    Finding::new(
                        FindingKind::OrphanReference,
                        Severity::Warning,
                        format!("cell references unknown word {id}"),
                    )
                    .at(pos)
                    .for_word(id),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crosslace_core::{Direction, Grid, Position, Word, WordCollection, WordId};

    use super::*;
    use crate::grid::test_util::{puzzle, run};

    fn check() -> BoxedGridCheck {
        Box::new(PlacementCheck::new())
    }

    #[test]
    fn test_consistent_puzzle() {
        let (grid, words) = puzzle(
            7,
            7,
            &[
                ("CAT", 2, 2, Direction::Horizontal),
                ("CAR", 2, 2, Direction::Vertical),
            ],
        );
        let analysis = run(&check(), &grid, &words);
        assert!(analysis.findings().is_empty());
        assert_eq!(analysis.details().word_count, 2);
    }

    #[test]
    fn test_word_out_of_bounds() {
        let grid = Grid::new(5, 5).unwrap();
        let mut words = WordCollection::new();
        words.insert(
            Word::new(WordId::new(1), "HELLO", "", Direction::Horizontal, Position::new(3, 3))
                .unwrap(),
        );
        let analysis = run(&check(), &grid, &words);
        let errors = &analysis.findings().errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, FindingKind::WordOutOfBounds);
        assert_eq!(errors[0].word_id, Some(WordId::new(1)));
    }

    #[test]
    fn test_words_missing_from_grid() {
        let grid = Grid::new(5, 5).unwrap();
        let mut words = WordCollection::new();
        words.insert(
            Word::new(WordId::new(1), "CAT", "", Direction::Vertical, Position::new(0, 0))
                .unwrap(),
        );
        let analysis = run(&check(), &grid, &words);
        let findings = analysis.findings();
        assert_eq!(findings.errors.len(), 3);
        assert!(findings.errors.iter().all(|f| f.kind == FindingKind::LetterMismatch));
        assert_eq!(findings.warnings.len(), 3);
        assert!(
            findings
                .warnings
                .iter()
                .all(|f| f.kind == FindingKind::MissingWordReference)
        );
    }

    #[test]
    fn test_blocked_cell_and_orphan_reference() {
        let (mut grid, mut words) = puzzle(7, 7, &[("CAT", 2, 2, Direction::Horizontal)]);
        let cat = words.iter().next().unwrap().id();
        grid.block(Position::new(2, 3)).unwrap();
        let analysis = run(&check(), &grid, &words);
        assert_eq!(
            analysis.findings().severity_of(FindingKind::BlockedInWord),
            Some(Severity::Error)
        );

        let (grid, _) = puzzle(7, 7, &[("CAT", 2, 2, Direction::Horizontal)]);
        words.remove(cat);
        let analysis = run(&check(), &grid, &words);
        assert_eq!(analysis.findings().warnings.len(), 3);
        assert!(
            analysis
                .findings()
                .warnings
                .iter()
                .all(|f| f.kind == FindingKind::OrphanReference && f.word_id == Some(cat))
        );
    }
}
