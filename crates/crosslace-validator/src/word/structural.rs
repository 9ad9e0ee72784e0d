//! Structural answer checks: emptiness, character set, length and uniqueness.

use std::collections::BTreeSet;

use crosslace_core::{WordError, is_answer_separator, normalize_answer};

use crate::{Finding, FindingKind, Findings, Severity, ValidatorConfig};

/// Checks the raw answer and returns its normalized form when it has one.
///
/// Every offending character is reported once, in order of first appearance. Length findings
/// apply to the normalized answer; they do not prevent later checks.
pub fn check_answer(
    raw: &str,
    config: &ValidatorConfig,
    grid_size: Option<(usize, usize)>,
    findings: &mut Findings,
) -> Option<String> {
    let mut invalid = BTreeSet::new();
    for ch in raw.trim().chars() {
        if !ch.is_ascii_alphabetic() && !is_answer_separator(ch) && invalid.insert(ch) {
            findings.push(Finding::new(
                FindingKind::InvalidCharacter,
                Severity::Error,
                format!("answer contains invalid character {ch:?}"),
            ));
        }
    }
    if !invalid.is_empty() {
        return None;
    }

    let text = match normalize_answer(raw) {
        Ok(text) => text,
        Err(WordError::Empty) => {
            findings.push(Finding::new(
                FindingKind::EmptyAnswer,
                Severity::Error,
                "answer has no letters",
            ));
            return None;
        }
        Err(err) => {
            findings.push(Finding::new(
                FindingKind::InvalidCharacter,
                Severity::Error,
                err.to_string(),
            ));
            return None;
        }
    };

    let len = text.len();
    if len < config.min_word_len {
        findings.push(Finding::new(
            FindingKind::AnswerTooShort,
            Severity::Error,
            format!(
                "answer has {len} letters, at least {} required",
                config.min_word_len
            ),
        ));
    }
    if len > config.max_word_len {
        findings.push(Finding::new(
            FindingKind::AnswerTooLong,
            Severity::Error,
            format!(
                "answer has {len} letters, at most {} allowed",
                config.max_word_len
            ),
        ));
    }
    if let Some((width, height)) = grid_size
        && len > width.max(height)
    {
        findings.push(Finding::new(
            FindingKind::ExceedsGrid,
            Severity::Error,
            format!("answer has {len} letters but the grid is {width}x{height}"),
        ));
    }
    Some(text)
}

/// Length of the prefix two answers must share to count as the same root.
///
/// The root is the first `min(4, len - 2)` letters; `None` when that is empty.
#[must_use]
pub fn root_len(len: usize) -> Option<usize> {
    let root = 4.min(len.saturating_sub(2));
    (root >= 1).then_some(root)
}

/// Returns `true` if both answers use the same letters the same number of times.
#[must_use]
pub fn is_anagram(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<char> = a.chars().collect();
    let mut b: Vec<char> = b.chars().collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Compares a normalized answer against the answers already in the puzzle.
///
/// Each existing answer yields at most one finding: a duplicate (error), else an anagram
/// (warning), else a shared root (warning). Existing answers that fail normalization are
/// ignored.
pub fn check_uniqueness<'a, I>(text: &str, existing: I, findings: &mut Findings)
where
    I: IntoIterator<Item = &'a str>,
{
    let root = root_len(text.chars().count()).map(|len| {
        let end = text.char_indices().nth(len).map_or(text.len(), |(end, _)| end);
        &text[..end]
    });
    for other in existing {
        let Ok(other) = normalize_answer(other) else {
            continue;
        };
        if other == text {
            findings.push(Finding::new(
                FindingKind::DuplicateAnswer,
                Severity::Error,
                format!("{text} is already in the puzzle"),
            ));
        } else if is_anagram(text, &other) {
            findings.push(Finding::new(
                FindingKind::Anagram,
                Severity::Warning,
                format!("{text} is an anagram of {other}"),
            ));
        } else if let Some(root) = root
            && other.starts_with(root)
        {
            findings.push(Finding::new(
                FindingKind::SharedRoot,
                Severity::Warning,
                format!("{text} shares the root {root} with {other}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str) -> (Option<String>, Findings) {
        let mut findings = Findings::default();
        let text = check_answer(raw, &ValidatorConfig::default(), Some((7, 5)), &mut findings);
        (text, findings)
    }

    #[test]
    fn test_separators_are_accepted() {
        let (text, findings) = check("ice-cream");
        assert_eq!(text.as_deref(), Some("ICECREAM"));
        assert_eq!(
            findings.severity_of(FindingKind::ExceedsGrid),
            Some(Severity::Error)
        );
    }

    #[test]
    fn test_each_invalid_character_reported_once() {
        let (text, findings) = check("R2D2!");
        assert_eq!(text, None);
        let kinds: Vec<_> = findings.errors.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [FindingKind::InvalidCharacter; 2]);
    }

    #[test]
    fn test_edge_separators_are_rejected() {
        let (text, findings) = check("-cat'");
        assert_eq!(text, None);
        assert_eq!(
            findings.severity_of(FindingKind::InvalidCharacter),
            Some(Severity::Error)
        );
        assert!(!findings.is_valid());
    }

    #[test]
    fn test_empty_and_short() {
        let (text, findings) = check(" - ");
        assert_eq!(text, None);
        assert!(findings.contains(FindingKind::EmptyAnswer));

        let (text, findings) = check("a");
        assert_eq!(text.as_deref(), Some("A"));
        assert!(findings.contains(FindingKind::AnswerTooShort));
    }

    #[test]
    fn test_root_len() {
        assert_eq!(root_len(2), None);
        assert_eq!(root_len(3), Some(1));
        assert_eq!(root_len(4), Some(2));
        assert_eq!(root_len(5), Some(3));
        assert_eq!(root_len(6), Some(4));
        assert_eq!(root_len(12), Some(4));
    }

    #[test]
    fn test_uniqueness_findings() {
        let mut findings = Findings::default();
        check_uniqueness("STONE", ["stone", "notes", "stop", "storm", "!!"], &mut findings);
        assert_eq!(findings.errors.len(), 1);
        assert_eq!(findings.errors[0].kind, FindingKind::DuplicateAnswer);
        let warnings: Vec<_> = findings.warnings.iter().map(|f| f.kind).collect();
        assert_eq!(
            warnings,
            [
                FindingKind::Anagram,
                FindingKind::SharedRoot,
                FindingKind::SharedRoot
            ]
        );
    }

    #[test]
    fn test_short_answers_share_roots() {
        let mut findings = Findings::default();
        check_uniqueness("STAR", ["stop"], &mut findings);
        assert_eq!(findings.severity_of(FindingKind::SharedRoot), Some(Severity::Warning));

        let mut findings = Findings::default();
        check_uniqueness("CAT", ["cow"], &mut findings);
        assert_eq!(findings.severity_of(FindingKind::SharedRoot), Some(Severity::Warning));

        let mut findings = Findings::default();
        check_uniqueness("CAT", ["dog", "at"], &mut findings);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_uniqueness_accepts_non_ascii_text() {
        let mut findings = Findings::default();
        check_uniqueness("\u{c9}\u{c9}AB", ["abba", "\u{c9}t\u{e9}"], &mut findings);
        assert!(findings.is_empty());
    }
}
