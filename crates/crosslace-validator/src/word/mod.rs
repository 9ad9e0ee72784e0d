//! Word quality validation.
//!
//! Structural checks (character set, length, uniqueness) live in [`structural`]; advisory
//! clue heuristics (obviousness, grammar, relevance) live in [`heuristic`]. The
//! [`WordQualityValidator`] runs both and scores the result.

use crosslace_core::{Grid, WordCollection, difficulty::difficulty};

pub use self::{
    heuristic::{
        check_grammar, contains_answer, obviousness, semantic_relevance, unique_ratio,
    },
    structural::{check_answer, check_uniqueness, is_anagram, root_len},
};
use crate::{
    Finding, FindingKind, Findings, Severity, ValidationError, ValidatorConfig, WordMetadata,
    WordReport, report::clamp_score,
};

pub mod heuristic;
pub mod structural;

const ERROR_PENALTY: f64 = 30.0;
const WARNING_PENALTY: f64 = 10.0;
const DIFFICULTY_BONUS: f64 = 10.0;
const VARIETY_BONUS: f64 = 5.0;
const RELEVANCE_BONUS: f64 = 10.0;

const LOW_DIFFICULTY: f64 = 0.2;
const OBVIOUS_THRESHOLD: f64 = 0.5;
const VARIETY_THRESHOLD: f64 = 0.6;
const RELEVANCE_THRESHOLD: f64 = 0.6;

/// What a word is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordContext {
    /// Answers already in the puzzle, raw or normalized.
    pub existing_words: Vec<String>,
    /// `(width, height)` of the target grid, if known.
    pub grid_size: Option<(usize, usize)>,
}

impl WordContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from a puzzle's grid and words.
    #[must_use]
    pub fn for_puzzle(grid: &Grid, words: &WordCollection) -> Self {
        Self {
            existing_words: words.texts().map(str::to_owned).collect(),
            grid_size: Some((grid.width(), grid.height())),
        }
    }

    /// Sets the existing answers.
    #[must_use]
    pub fn existing_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the target grid size.
    #[must_use]
    pub fn grid_size(mut self, width: usize, height: usize) -> Self {
        self.grid_size = Some((width, height));
        self
    }
}

/// Scores a single answer and its clue.
///
/// Checks never short-circuit on warnings. When the answer cannot be normalized the checks
/// that need its letters are skipped, but clue length and grammar are still reported.
///
/// # Scoring
///
/// Start at 100, subtract 30 per error and 10 per warning, add 10 when difficulty is within
/// `[0.3, 0.7]`, 5 when more than 60% of the letters are distinct and 10 when the clue
/// relevance exceeds 0.6. The result is clamped to `[0, 100]`.
///
/// # Examples
///
/// ```
/// use crosslace_validator::{FindingKind, WordContext, WordQualityValidator};
///
/// let validator = WordQualityValidator::default();
/// let context = WordContext::new().existing_words(["DOG"]).grid_size(9, 9);
///
/// let report = validator.validate("cat", Some("Feline pet."), &context);
/// assert!(report.valid);
///
/// let report = validator.validate("cat", Some("A cat."), &context);
/// assert!(!report.valid);
/// assert!(report.findings.contains(FindingKind::ClueContainsAnswer));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordQualityValidator {
    config: ValidatorConfig,
}

impl WordQualityValidator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `text` with an optional clue.
    ///
    /// Always returns a report; internal failures become a single critical error with score 0.
    #[must_use]
    pub fn validate(&self, text: &str, clue: Option<&str>, context: &WordContext) -> WordReport {
        self.try_validate(text, clue, context)
            .unwrap_or_else(|err| {
                log::warn!("word validation of {text:?} failed: {err}");
                critical_report(&err)
            })
    }

    fn try_validate(
        &self,
        text: &str,
        clue: Option<&str>,
        context: &WordContext,
    ) -> Result<WordReport, ValidationError> {
        let mut findings = Findings::default();
        let mut metadata = WordMetadata::default();

        let answer = check_answer(text, &self.config, context.grid_size, &mut findings);
        if let Some(answer) = &answer {
            metadata.length = answer.len();
            metadata.difficulty = ValidationError::finite("difficulty", difficulty(answer))?;
            metadata.unique_ratio = ValidationError::finite("unique_ratio", unique_ratio(answer))?;
            check_uniqueness(
                answer,
                context.existing_words.iter().map(String::as_str),
                &mut findings,
            );
        }

        match clue.map(str::trim).filter(|clue| !clue.is_empty()) {
            None => findings.push(Finding::new(
                FindingKind::MissingClue,
                Severity::Suggestion,
                "add a clue",
            )),
            Some(clue) => {
                self.check_clue_length(clue, &mut findings);
                if let Some(answer) = &answer {
                    let obvious = ValidationError::finite("obviousness", obviousness(answer, clue))?;
                    let relevance =
                        ValidationError::finite("relevance", semantic_relevance(answer, clue))?;
                    if contains_answer(answer, clue) {
                        findings.push(Finding::new(
                            FindingKind::ClueContainsAnswer,
                            Severity::Error,
                            format!("clue contains the answer {answer}"),
                        ));
                    } else if obvious > OBVIOUS_THRESHOLD {
                        findings.push(Finding::new(
                            FindingKind::ObviousClue,
                            Severity::Suggestion,
                            format!("clue is quite obvious ({obvious:.2})"),
                        ));
                    }
                    metadata.obviousness = Some(obvious);
                    metadata.semantic_relevance = Some(relevance);
                }
                check_grammar(clue, &mut findings);
            }
        }

        if answer.is_some() && metadata.difficulty < LOW_DIFFICULTY {
            findings.push(Finding::new(
                FindingKind::LowDifficulty,
                Severity::Suggestion,
                format!("answer is very easy ({:.2})", metadata.difficulty),
            ));
        }

        let score = score(&findings, &metadata);
        metadata.normalized = answer;
        Ok(WordReport {
            valid: findings.is_valid(),
            findings,
            score,
            metadata,
        })
    }

    fn check_clue_length(&self, clue: &str, findings: &mut Findings) {
        let len = clue.chars().count();
        if len < self.config.min_clue_len {
            findings.push(Finding::new(
                FindingKind::ClueTooShort,
                Severity::Warning,
                format!(
                    "clue has {len} characters, {} recommended at least",
                    self.config.min_clue_len
                ),
            ));
        }
        if len > self.config.max_clue_len {
            findings.push(Finding::new(
                FindingKind::ClueTooLong,
                Severity::Warning,
                format!(
                    "clue has {len} characters, {} recommended at most",
                    self.config.max_clue_len
                ),
            ));
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn score(findings: &Findings, metadata: &WordMetadata) -> u8 {
    let mut raw = 100.0;
    raw -= ERROR_PENALTY * findings.errors.len() as f64;
    raw -= WARNING_PENALTY * findings.warnings.len() as f64;
    if (0.3..=0.7).contains(&metadata.difficulty) {
        raw += DIFFICULTY_BONUS;
    }
    if metadata.unique_ratio > VARIETY_THRESHOLD {
        raw += VARIETY_BONUS;
    }
    if metadata
        .semantic_relevance
        .is_some_and(|relevance| relevance > RELEVANCE_THRESHOLD)
    {
        raw += RELEVANCE_BONUS;
    }
    clamp_score(raw)
}

fn critical_report(err: &ValidationError) -> WordReport {
    let mut findings = Findings::default();
    findings.push(Finding::new(
        FindingKind::Internal,
        Severity::Error,
        format!("validation failed: {err}"),
    ));
    WordReport {
        valid: false,
        findings,
        score: 0,
        metadata: WordMetadata::default(),
    }
}
