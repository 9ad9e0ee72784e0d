use crosslace_core::{Direction, Position, Word, difficulty::is_rare_letter};

const BASE_QUALITY: f64 = 0.5;
const CENTER_WEIGHT: f64 = 0.3;
const RARE_LETTER_BONUS: f64 = 0.2;

/// A letter shared between a candidate answer and a placed word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionCandidate {
    /// Offset of the shared letter in the candidate answer.
    pub new_index: usize,
    /// Offset of the shared letter in the placed word.
    pub existing_index: usize,
    /// The shared letter.
    pub letter: char,
    /// Heuristic quality in `[0.5, 1.0]`; higher is better.
    pub quality: f64,
}

impl IntersectionCandidate {
    /// Converts the candidate into an anchor for the new word, perpendicular to `existing`.
    ///
    /// Returns `None` when the anchor would fall before the first row or column.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosslace_core::{Direction, Position, Word, WordId};
    /// use crosslace_placement::find_intersections;
    ///
    /// let cat = Word::new(WordId::new(1), "CAT", "", Direction::Horizontal, Position::new(3, 2))?;
    /// let best = find_intersections("TOE", &cat)[0];
    /// assert_eq!(best.placement(&cat), Some((Direction::Vertical, Position::new(3, 4))));
    /// # Ok::<(), crosslace_core::WordError>(())
    /// ```
    #[must_use]
    pub fn placement(&self, existing: &Word) -> Option<(Direction, Position)> {
        let direction = existing.direction().perpendicular();
        let crossing = existing
            .start()
            .step(existing.direction(), self.existing_index)?;
        let start = crossing.step_back(direction, self.new_index)?;
        Some((direction, start))
    }
}

/// Finds every pair `(i, j)` with `new_text[i] == existing.text()[j]`, best first.
///
/// Quality starts at 0.5, gains up to 0.3 the closer both offsets sit to the centre of their
/// words (distance normalized by the longer word), and gains 0.2 for a rare letter. The sort
/// is stable, so equal-quality pairs keep their `(i, j)` generation order.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn find_intersections(new_text: &str, existing: &Word) -> Vec<IntersectionCandidate> {
    let new_letters: Vec<char> = new_text.chars().map(|ch| ch.to_ascii_uppercase()).collect();
    let existing_letters: Vec<char> = existing.text().chars().collect();
    let new_center = new_letters.len() / 2;
    let existing_center = existing_letters.len() / 2;
    let longest = new_letters.len().max(existing_letters.len()).max(1) as f64;

    let mut candidates = Vec::new();
    for (i, &letter) in new_letters.iter().enumerate() {
        for (j, &other) in existing_letters.iter().enumerate() {
            if letter != other {
                continue;
            }
            let distance = (i.abs_diff(new_center) + j.abs_diff(existing_center)) as f64;
            let centrality = (1.0 - distance / longest).max(0.0);
            let mut quality = BASE_QUALITY + CENTER_WEIGHT * centrality;
            if is_rare_letter(letter) {
                quality += RARE_LETTER_BONUS;
            }
            candidates.push(IntersectionCandidate {
                new_index: i,
                existing_index: j,
                letter,
                quality,
            });
        }
    }
    candidates.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    candidates
}

#[cfg(test)]
mod tests {
    use crosslace_core::WordId;

    use super::*;

    fn existing(text: &str, direction: Direction, row: usize, col: usize) -> Word {
        Word::new(WordId::new(1), text, "", direction, Position::new(row, col)).unwrap()
    }

    #[test]
    fn test_finds_all_letter_pairs() {
        let word = existing("BANANA", Direction::Horizontal, 0, 0);
        let pairs = find_intersections("AN", &word);
        // 'A' matches three times, 'N' twice.
        assert_eq!(pairs.len(), 5);
        assert!(
            pairs
                .iter()
                .all(|pair| word.text().chars().nth(pair.existing_index) == Some(pair.letter))
        );
    }

    #[test]
    fn test_sorted_by_descending_quality() {
        let word = existing("PARADE", Direction::Horizontal, 0, 0);
        let pairs = find_intersections("RADAR", &word);
        assert!(pairs.windows(2).all(|w| w[0].quality >= w[1].quality));
        // (1, 3), (2, 4) and (3, 3) tie nearest the centres; generation order is kept.
        let best = pairs[0];
        assert_eq!((best.new_index, best.existing_index), (1, 3));
        assert_eq!((pairs[1].new_index, pairs[1].existing_index), (2, 4));
    }

    #[test]
    fn test_rare_letter_bonus() {
        let word = existing("QUIZ", Direction::Vertical, 0, 0);
        let pairs = find_intersections("ZIP", &word);
        let z = pairs.iter().find(|pair| pair.letter == 'Z').unwrap();
        let i = pairs.iter().find(|pair| pair.letter == 'I').unwrap();
        assert!(z.quality > 0.7);
        assert!(z.quality > i.quality);
        assert_eq!(pairs[0].letter, 'Z');
    }

    #[test]
    fn test_no_common_letters() {
        let word = existing("CAT", Direction::Horizontal, 0, 0);
        assert!(find_intersections("DOG", &word).is_empty());
    }

    #[test]
    fn test_placement_is_perpendicular() {
        let across = existing("CAT", Direction::Horizontal, 2, 2);
        let pair = IntersectionCandidate {
            new_index: 1,
            existing_index: 0,
            letter: 'C',
            quality: 0.5,
        };
        assert_eq!(
            pair.placement(&across),
            Some((Direction::Vertical, Position::new(1, 2)))
        );

        let down = existing("CAT", Direction::Vertical, 2, 2);
        assert_eq!(
            pair.placement(&down),
            Some((Direction::Horizontal, Position::new(2, 1)))
        );

        let edge = existing("CAT", Direction::Horizontal, 0, 0);
        assert_eq!(pair.placement(&edge), None);
    }
}
