//! Validation findings and reports.

use crosslace_core::{ContentHash, Position, WordId};
use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The puzzle or word is invalid.
    #[display("error")]
    Error,
    /// Valid but suboptimal.
    #[display("warning")]
    Warning,
    /// Advisory only.
    #[display("suggestion")]
    Suggestion,
}

/// The kind of a finding.
///
/// Kinds are the stable contract of a report; messages are for humans and may change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    // Word structure.
    /// The answer is empty after trimming.
    #[display("empty answer")]
    EmptyAnswer,
    /// The answer is shorter than the configured minimum.
    #[display("answer too short")]
    AnswerTooShort,
    /// The answer is longer than the configured maximum.
    #[display("answer too long")]
    AnswerTooLong,
    /// The answer contains a character outside letters, space, hyphen and apostrophe.
    #[display("invalid character")]
    InvalidCharacter,
    /// The answer does not fit the grid it is meant for.
    #[display("answer exceeds grid")]
    ExceedsGrid,

    // Word uniqueness.
    /// The answer is already in the puzzle.
    #[display("duplicate answer")]
    DuplicateAnswer,
    /// The answer is an anagram of an existing answer.
    #[display("anagram of existing answer")]
    Anagram,
    /// The answer shares its root with an existing answer.
    #[display("shared root")]
    SharedRoot,

    // Clue.
    /// No clue was supplied.
    #[display("missing clue")]
    MissingClue,
    /// The clue is shorter than the configured minimum.
    #[display("clue too short")]
    ClueTooShort,
    /// The clue is longer than the configured maximum.
    #[display("clue too long")]
    ClueTooLong,
    /// The clue spells out the answer.
    #[display("clue contains answer")]
    ClueContainsAnswer,
    /// The clue gives the answer away too easily.
    #[display("obvious clue")]
    ObviousClue,
    /// The clue starts with a lowercase letter.
    #[display("clue capitalization")]
    ClueCapitalization,
    /// The clue does not end with punctuation.
    #[display("clue punctuation")]
    ClueTerminalPunctuation,
    /// The clue contains two consecutive spaces.
    #[display("doubled space")]
    ClueDoubledSpace,
    /// The clue has a space right before punctuation.
    #[display("space before punctuation")]
    ClueSpaceBeforePunctuation,
    /// The answer is very easy.
    #[display("low difficulty")]
    LowDifficulty,

    // Grid structure.
    /// A dimension is outside the allowed range.
    #[display("invalid dimensions")]
    InvalidDimensions,
    /// Rows differ in length.
    #[display("not rectangular")]
    NotRectangular,
    /// The grid is much wider than tall or the reverse.
    #[display("extreme aspect ratio")]
    ExtremeAspectRatio,
    /// The grid has more cells than recommended.
    #[display("large area")]
    LargeArea,
    /// A cell is internally inconsistent.
    #[display("malformed cell")]
    MalformedCell,

    // Placement.
    /// A word's span leaves the grid.
    #[display("word out of bounds")]
    WordOutOfBounds,
    /// A word's span crosses a blocked cell.
    #[display("word crosses blocked cell")]
    BlockedInWord,
    /// A cell letter differs from the word's letter.
    #[display("letter mismatch")]
    LetterMismatch,
    /// A cell in a word's span does not reference the word.
    #[display("missing word reference")]
    MissingWordReference,
    /// A cell references a word missing from the collection.
    #[display("orphan reference")]
    OrphanReference,

    // Connectivity.
    /// A word crosses no other word.
    #[display("isolated word")]
    IsolatedWord,
    /// Filled cells form more than one connected component.
    #[display("disconnected grid")]
    Disconnected,

    // Density.
    /// Too few filled cells.
    #[display("low density")]
    LowDensity,
    /// Too many filled cells.
    #[display("high density")]
    HighDensity,
    /// Too many blocked cells.
    #[display("excessive blocked cells")]
    ExcessiveBlockedCells,

    // Aesthetics.
    /// The block pattern is asymmetric on both axes.
    #[display("low symmetry")]
    LowSymmetry,
    /// Filled cells crowd into opposite quadrants.
    #[display("quadrant imbalance")]
    QuadrantImbalance,

    /// Validation itself failed.
    #[display("internal error")]
    Internal,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// What was found.
    pub kind: FindingKind,
    /// How serious it is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Cell the finding refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Word the finding refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_id: Option<WordId>,
}

impl Finding {
    /// Creates a finding without location.
    #[must_use]
    pub fn new(kind: FindingKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            position: None,
            word_id: None,
        }
    }

    /// Attaches a cell position.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attaches a word id.
    #[must_use]
    pub fn for_word(mut self, word_id: WordId) -> Self {
        self.word_id = Some(word_id);
        self
    }
}

/// Findings grouped by severity, each group in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Findings {
    /// Findings that make the input invalid.
    pub errors: Vec<Finding>,
    /// Findings about valid but suboptimal input.
    pub warnings: Vec<Finding>,
    /// Advisory findings.
    pub suggestions: Vec<Finding>,
}

impl Findings {
    /// Files a finding under its severity.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Suggestion => self.suggestions.push(finding),
        }
    }

    /// Returns `true` if there are no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over all findings, errors first.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(&self.warnings)
            .chain(&self.suggestions)
    }

    /// Returns `true` if any finding has this kind.
    #[must_use]
    pub fn contains(&self, kind: FindingKind) -> bool {
        self.iter().any(|finding| finding.kind == kind)
    }

    /// Returns the severity of the first finding with this kind.
    #[must_use]
    pub fn severity_of(&self, kind: FindingKind) -> Option<Severity> {
        self.iter()
            .find(|finding| finding.kind == kind)
            .map(|finding| finding.severity)
    }

    /// Number of findings across all severities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.suggestions.len()
    }

    /// Returns `true` if there are no findings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Metrics computed while validating one word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordMetadata {
    /// The normalized answer, if normalization succeeded.
    pub normalized: Option<String>,
    /// Number of letters in the normalized answer.
    pub length: usize,
    /// Difficulty in `[0, 1]`.
    pub difficulty: f64,
    /// Distinct letters divided by length.
    pub unique_ratio: f64,
    /// Clue obviousness in `[0, 1]`, when a clue was checked.
    pub obviousness: Option<f64>,
    /// Clue relevance in `[0, 1]`, when a clue was checked.
    pub semantic_relevance: Option<f64>,
}

/// Result of validating one word and its clue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordReport {
    /// `true` when there are no errors.
    pub valid: bool,
    /// Findings by severity.
    #[serde(flatten)]
    pub findings: Findings,
    /// Overall quality in `[0, 100]`.
    pub score: u8,
    /// Computed metrics.
    pub metadata: WordMetadata,
}

/// Sub-metrics of a grid report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridDetails {
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Words in the collection.
    pub word_count: usize,
    /// Unblocked cells holding a letter.
    pub filled_cells: usize,
    /// Blocked cells.
    pub blocked_cells: usize,
    /// `filled_cells / area`.
    pub density: f64,
    /// `blocked_cells / area`.
    pub blocked_ratio: f64,
    /// Cells referenced by at least two words.
    pub intersections: usize,
    /// Words crossing no other word, when more than one word exists.
    pub isolated_words: Vec<WordId>,
    /// Connected components of filled cells.
    pub components: usize,
    /// Share of blocked flags matching under the top/bottom mirror.
    pub horizontal_symmetry: f64,
    /// Share of blocked flags matching under the left/right mirror.
    pub vertical_symmetry: f64,
    /// `1 - |TL + BR - TR - BL| / area` over filled cells.
    pub quadrant_balance: f64,
    /// Filled share of the central region.
    pub center_fill: f64,
}

/// Result of validating a whole grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridReport {
    /// `true` when there are no errors.
    pub valid: bool,
    /// Findings by severity.
    #[serde(flatten)]
    pub findings: Findings,
    /// Overall quality in `[0, 100]`.
    pub score: u8,
    /// Sub-metrics.
    pub details: GridDetails,
    /// Content key the report is cached under.
    pub cache_key: ContentHash,
}

/// Clamps a raw score into `[0, 100]` and rounds it.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_routes_by_severity() {
        let mut findings = Findings::default();
        findings.push(Finding::new(FindingKind::LowDensity, Severity::Warning, "sparse"));
        findings.push(Finding::new(FindingKind::Internal, Severity::Error, "boom"));
        findings.push(Finding::new(FindingKind::LowSymmetry, Severity::Suggestion, "tidy"));
        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.warnings.len(), 1);
        assert_eq!(findings.suggestions.len(), 1);
        assert!(!findings.is_valid());
        assert_eq!(findings.iter().next().map(|f| f.kind), Some(FindingKind::Internal));
        assert_eq!(
            findings.severity_of(FindingKind::LowSymmetry),
            Some(Severity::Suggestion)
        );
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-40.0), 0);
        assert_eq!(clamp_score(99.5), 100);
        assert_eq!(clamp_score(250.0), 100);
        assert_eq!(clamp_score(f64::NAN), 0);
        assert_eq!(clamp_score(72.4), 72);
    }

    #[test]
    fn test_finding_serializes_kind_as_snake_case() {
        let finding = Finding::new(FindingKind::ClueContainsAnswer, Severity::Error, "spoiler")
            .for_word(WordId::new(3));
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["kind"], "clue_contains_answer");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["word_id"], 3);
        assert!(json.get("position").is_none());
    }
}
