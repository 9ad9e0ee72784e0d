//! Heuristic clue checks: obviousness, grammar and relevance.
//!
//! None of this understands language. The checks look at letters, tokens and a small
//! category lexicon, which is enough to catch clues that give the answer away or read
//! sloppily.

use std::collections::BTreeSet;

use crate::{Finding, FindingKind, Findings, Severity};

const VERBATIM_WEIGHT: f64 = 0.8;
const SUBSTRING_WEIGHT: f64 = 0.3;
const BREVITY_WEIGHT: f64 = 0.2;
const BREVITY_HORIZON: usize = 50;
const MIN_SUBSTRING_LEN: usize = 3;

const CATEGORY_MATCH: f64 = 0.7;
const PREFIX_TOKEN_BONUS: f64 = 0.15;
const DESCRIPTIVE_BONUS: f64 = 0.1;

const PUNCTUATION: [char; 6] = [',', '.', '!', '?', ';', ':'];
const TERMINATORS: [char; 5] = ['.', '?', '!', '"', ')'];

/// Category keywords that may appear in a clue, and answers belonging to the category.
const CATEGORIES: &[(&[&str], &[&str])] = &[
    (
        &[
            "ANIMAL", "PET", "BEAST", "CREATURE", "FELINE", "CANINE", "MAMMAL", "BIRD", "FISH",
            "REPTILE", "INSECT",
        ],
        &[
            "CAT", "DOG", "HORSE", "COW", "PIG", "LION", "TIGER", "BEAR", "WOLF", "FOX", "EAGLE",
            "OWL", "SHARK", "SNAKE", "ANT", "BEE", "CAMEL", "MOUSE", "RAT", "EEL", "HEN",
        ],
    ),
    (
        &["COLOR", "COLOUR", "HUE", "SHADE", "TINT"],
        &[
            "RED", "BLUE", "GREEN", "YELLOW", "ORANGE", "PURPLE", "PINK", "BLACK", "WHITE",
            "GRAY", "GREY", "BROWN", "TAN", "TEAL", "CYAN",
        ],
    ),
    (
        &["FRUIT", "BERRY", "CITRUS", "ORCHARD"],
        &[
            "APPLE", "PEAR", "PLUM", "GRAPE", "LEMON", "LIME", "ORANGE", "BANANA", "MANGO",
            "PEACH", "CHERRY", "KIWI", "FIG", "DATE",
        ],
    ),
    (
        &["NUMBER", "COUNT", "DIGIT", "INTEGER"],
        &[
            "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ZERO",
            "DOZEN",
        ],
    ),
    (
        &["PLANET", "ORBIT", "SPACE", "SOLAR", "CELESTIAL", "STAR"],
        &[
            "MARS", "VENUS", "EARTH", "SATURN", "PLUTO", "MOON", "SUN", "COMET", "NOVA", "ORION",
        ],
    ),
    (
        &["BODY", "ANATOMY", "LIMB", "ORGAN"],
        &[
            "ARM", "LEG", "HEAD", "KNEE", "ELBOW", "EYE", "EAR", "NOSE", "HAND", "FOOT", "HEART",
            "LUNG", "TOE", "SHIN",
        ],
    ),
    (
        &["WEATHER", "FORECAST", "STORM", "SKY", "CLIMATE"],
        &[
            "RAIN", "SNOW", "HAIL", "SLEET", "FOG", "MIST", "WIND", "GALE", "CLOUD", "THUNDER",
        ],
    ),
];

/// Splits a clue into uppercase alphabetic tokens.
fn tokens(clue: &str) -> Vec<String> {
    clue.split(|ch: char| !ch.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

/// Returns `true` if the clue spells out the normalized answer.
///
/// Only the clue's letters are compared, uppercased and with everything else removed, so
/// `"Ice cream"` gives away `ICECREAM` and `"Concatenate"` gives away `CAT`.
///
/// # Examples
///
/// ```
/// use crosslace_validator::word::contains_answer;
///
/// assert!(contains_answer("ICECREAM", "Ice cream, for one"));
/// assert!(contains_answer("CAT", "Concatenate strings."));
/// assert!(!contains_answer("DOG", "Feline pet."));
/// ```
#[must_use]
pub fn contains_answer(answer: &str, clue: &str) -> bool {
    if answer.is_empty() {
        return false;
    }
    let letters: String = clue
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    letters.contains(answer)
}

/// Byte offsets of every character boundary in `text`, including the end.
fn char_bounds(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain([text.len()])
        .collect()
}

/// Scores how much the clue gives the answer away, in `[0, 1]`.
///
/// Adds 0.8 when the clue contains the answer, up to 0.3 for the share of the answer's
/// substrings of three or more letters found in the clue, and up to 0.2 for brevity
/// (a 50-character clue earns nothing).
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn obviousness(answer: &str, clue: &str) -> f64 {
    let mut score = 0.0;
    if contains_answer(answer, clue) {
        score += VERBATIM_WEIGHT;
    }

    let upper = clue.to_ascii_uppercase();
    let bounds = char_bounds(answer);
    let substrings: BTreeSet<&str> = (MIN_SUBSTRING_LEN..bounds.len())
        .flat_map(|len| {
            bounds
                .windows(len + 1)
                .map(move |window| &answer[window[0]..window[len]])
        })
        .collect();
    if !substrings.is_empty() {
        let found = substrings.iter().filter(|sub| upper.contains(**sub)).count();
        score += SUBSTRING_WEIGHT * found as f64 / substrings.len() as f64;
    }

    let len = clue.chars().count().min(BREVITY_HORIZON);
    score += BREVITY_WEIGHT * (1.0 - len as f64 / BREVITY_HORIZON as f64);
    score.min(1.0)
}

/// Scores how well the clue relates to the answer, in `[0, 1]`.
///
/// Adds 0.7 when the answer belongs to a category the clue names, 0.15 for each clue word of
/// four or more letters sharing the answer's first three letters, and 0.1 for a clue of
/// three or more words.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn semantic_relevance(answer: &str, clue: &str) -> f64 {
    let tokens = tokens(clue);
    let mut score = 0.0;

    let names_category = |keywords: &[&str]| {
        tokens.iter().any(|token| {
            keywords.iter().any(|keyword| {
                token.as_str() == *keyword || token.strip_suffix('S').is_some_and(|stem| stem == *keyword)
            })
        })
    };
    if CATEGORIES
        .iter()
        .any(|(keywords, members)| members.contains(&answer) && names_category(keywords))
    {
        score += CATEGORY_MATCH;
    }

    if let Some(&end) = char_bounds(answer).get(3) {
        let prefix = &answer[..end];
        let related = tokens
            .iter()
            .filter(|token| token.len() >= 4 && token.as_str() != answer)
            .filter(|token| token.starts_with(prefix))
            .count();
        score += PREFIX_TOKEN_BONUS * related as f64;
    }

    if tokens.len() >= 3 {
        score += DESCRIPTIVE_BONUS;
    }
    score.min(1.0)
}

/// Distinct letters divided by length; `0.0` for an empty answer.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn unique_ratio(answer: &str) -> f64 {
    if answer.is_empty() {
        return 0.0;
    }
    let unique: BTreeSet<char> = answer.chars().collect();
    unique.len() as f64 / answer.chars().count() as f64
}

/// Checks capitalization, terminal punctuation and spacing of a clue.
pub fn check_grammar(clue: &str, findings: &mut Findings) {
    let clue = clue.trim();
    let is_question = clue.ends_with('?');

    if !is_question && clue.chars().next().is_some_and(char::is_lowercase) {
        findings.push(Finding::new(
            FindingKind::ClueCapitalization,
            Severity::Warning,
            "clue should start with a capital letter",
        ));
    }
    if clue
        .chars()
        .next_back()
        .is_some_and(|ch| !TERMINATORS.contains(&ch))
    {
        findings.push(Finding::new(
            FindingKind::ClueTerminalPunctuation,
            Severity::Suggestion,
            "clue could end with punctuation",
        ));
    }
    if clue.contains("  ") {
        findings.push(Finding::new(
            FindingKind::ClueDoubledSpace,
            Severity::Warning,
            "clue contains doubled spaces",
        ));
    }
    let chars: Vec<char> = clue.chars().collect();
    if chars
        .windows(2)
        .any(|pair| pair[0] == ' ' && PUNCTUATION.contains(&pair[1]))
    {
        findings.push(Finding::new(
            FindingKind::ClueSpaceBeforePunctuation,
            Severity::Warning,
            "clue has a space before punctuation",
        ));
    }
}
