//! Heuristic difficulty scoring for answers.
//!
//! The score combines four signals, each additive, and is capped at 1:
//!
//! - length: `min(len / 15, 0.4)`
//! - rare letters: `rare / len * 0.3`, using [`RARE_LETTERS`]
//! - consonant clusters: `0.1` per maximal run of at least three consonants
//! - rare combinations: `0.1` per occurrence of any entry of [`RARE_COMBINATIONS`]
//!
//! The same rare-letter set drives intersection quality in placement.

/// Letters that are uncommon in English answers.
pub const RARE_LETTERS: [char; 6] = ['J', 'K', 'Q', 'V', 'X', 'Z'];

/// Letter pairs that make an answer harder to recognise from crossings.
pub const RARE_COMBINATIONS: [&str; 10] = [
    "QU", "XC", "ZZ", "XX", "PH", "GH", "PS", "KN", "WR", "CZ",
];

const CLUSTER_MIN_RUN: usize = 3;

/// Returns `true` if `ch` is one of [`RARE_LETTERS`] (case-insensitive).
#[must_use]
#[inline]
pub fn is_rare_letter(ch: char) -> bool {
    RARE_LETTERS.contains(&ch.to_ascii_uppercase())
}

/// Returns `true` for the five vowels; `Y` counts as a consonant.
#[must_use]
#[inline]
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_uppercase(), 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Counts the rare letters in `text`.
#[must_use]
pub fn rare_letter_count(text: &str) -> usize {
    text.chars().filter(|&ch| is_rare_letter(ch)).count()
}

/// Counts maximal runs of at least three consecutive consonants.
#[must_use]
pub fn consonant_clusters(text: &str) -> usize {
    let mut clusters = 0;
    let mut run = 0;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() && !is_vowel(ch) {
            run += 1;
            if run == CLUSTER_MIN_RUN {
                clusters += 1;
            }
        } else {
            run = 0;
        }
    }
    clusters
}

/// Counts occurrences of [`RARE_COMBINATIONS`], overlapping matches included.
#[must_use]
pub fn rare_combinations(text: &str) -> usize {
    let upper = text.to_ascii_uppercase();
    RARE_COMBINATIONS
        .iter()
        .map(|combo| {
            upper
                .as_bytes()
                .windows(combo.len())
                .filter(|window| *window == combo.as_bytes())
                .count()
        })
        .sum()
}

/// Scores the difficulty of a normalized answer in `[0, 1]`.
///
/// Returns `0.0` for an empty answer.
///
/// # Examples
///
/// ```
/// use crosslace_core::difficulty::difficulty;
///
/// let easy = difficulty("AREA");
/// let hard = difficulty("JAZZ");
/// assert!(hard > easy);
/// assert!((0.0..=1.0).contains(&hard));
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn difficulty(text: &str) -> f64 {
    let len = text.chars().count();
    if len == 0 {
        return 0.0;
    }
    let len_f = len as f64;
    let length_score = (len_f / 15.0).min(0.4);
    let rare_score = rare_letter_count(text) as f64 / len_f * 0.3;
    let cluster_score = consonant_clusters(text) as f64 * 0.1;
    let combo_score = rare_combinations(text) as f64 * 0.1;
    (length_score + rare_score + cluster_score + combo_score).min(1.0)
}
