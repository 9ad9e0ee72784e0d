use std::cmp::Reverse;

use crosslace_core::{
    Direction, Grid, Position, Word, WordCollection, WordError, WordId, normalize_answer,
};

use crate::{PlacementRejection, can_place, find_intersections, place};

/// An answer and clue waiting to be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Raw answer text; normalized before placement.
    pub text: String,
    /// Clue text.
    pub clue: String,
}

impl WordEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(text: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clue: clue.into(),
        }
    }
}

/// Why [`auto_place`] left an entry unplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SkipReason {
    /// The answer failed normalization.
    #[display("invalid answer: {_0}")]
    InvalidText(WordError),
    /// The first word could not be centred (usually too long for the grid).
    #[display("cannot be centred: {_0}")]
    NoCenterFit(PlacementRejection),
    /// No intersection with an already placed word yields a legal placement.
    #[display("no legal intersection with placed words")]
    NoIntersection,
}

/// An entry [`auto_place`] did not commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// The entry as supplied.
    pub entry: WordEntry,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Result of a batch placement.
#[derive(Debug, Clone, Default)]
pub struct AutoPlaceOutcome {
    /// Committed words, in commit order.
    pub placed: Vec<Word>,
    /// Entries left unplaced, in processing order.
    pub skipped: Vec<SkippedEntry>,
}

struct Pending<'a> {
    entry: &'a WordEntry,
    text: String,
}

/// Places a batch of entries greedily.
///
/// Entries are processed longest first (ties keep input order). On a grid without words the
/// longest entry is placed horizontally in the centre: `row = height / 2`,
/// `col = (width - len) / 2`. Every other entry tries the words already placed, in placement
/// order, and for each of them the intersection candidates in quality order; the first
/// candidate passing [`can_place`] is committed. Words already in `words` count as placed and
/// come first.
///
/// This is first-fit, not a search: an entry skipped here may still fit after a different
/// ordering. Callers wanting better fills can shuffle the input and keep the best outcome.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, WordCollection};
/// use crosslace_placement::{WordEntry, auto_place};
///
/// let mut grid = Grid::new(9, 9)?;
/// let mut words = WordCollection::new();
/// let entries = [
///     WordEntry::new("cat", "Feline pet"),
///     WordEntry::new("planet", "Mars, for one"),
///     WordEntry::new("xyz", "Not a word"),
/// ];
/// let outcome = auto_place(&mut grid, &mut words, &entries);
///
/// assert_eq!(outcome.placed[0].text(), "PLANET");
/// assert_eq!(outcome.placed.len(), 2);
/// assert_eq!(outcome.skipped.len(), 1);
/// # Ok::<(), crosslace_core::GridError>(())
/// ```
pub fn auto_place(
    grid: &mut Grid,
    words: &mut WordCollection,
    entries: &[WordEntry],
) -> AutoPlaceOutcome {
    let mut outcome = AutoPlaceOutcome::default();

    let mut pending = Vec::with_capacity(entries.len());
    for entry in entries {
        match normalize_answer(&entry.text) {
            Ok(text) => pending.push(Pending { entry, text }),
            Err(err) => skip(&mut outcome, entry, SkipReason::InvalidText(err)),
        }
    }
    pending.sort_by_key(|pending| Reverse(pending.text.len()));

    let mut anchors: Vec<WordId> = words.iter().map(Word::id).collect();
    let mut pending = pending.into_iter();

    if !grid.has_words()
        && let Some(first) = pending.next()
    {
        match center_slot(grid, &first.text) {
            Ok(start) => {
                let id = commit(grid, words, &first, Direction::Horizontal, start, &mut outcome);
                anchors.extend(id);
            }
            Err(rejection) => skip(&mut outcome, first.entry, SkipReason::NoCenterFit(rejection)),
        }
    }

    for candidate in pending {
        let slot = anchors.iter().find_map(|&id| {
            let existing = words.get(id)?;
            find_intersections(&candidate.text, existing)
                .into_iter()
                .filter_map(|pair| pair.placement(existing))
                .find(|&(direction, start)| {
                    can_place(grid, &candidate.text, start, direction).is_ok()
                })
        });
        match slot {
            Some((direction, start)) => {
                let id = commit(grid, words, &candidate, direction, start, &mut outcome);
                anchors.extend(id);
            }
            None => skip(&mut outcome, candidate.entry, SkipReason::NoIntersection),
        }
    }

    log::info!(
        "auto placement committed {} of {} entries",
        outcome.placed.len(),
        entries.len()
    );
    outcome
}

fn center_slot(grid: &Grid, text: &str) -> Result<Position, PlacementRejection> {
    let col = grid
        .width()
        .checked_sub(text.len())
        .ok_or(PlacementRejection::OutOfBounds {
            position: Position::new(grid.height() / 2, grid.width()),
        })?
        / 2;
    let start = Position::new(grid.height() / 2, col);
    can_place(grid, text, start, Direction::Horizontal)?;
    Ok(start)
}

fn commit(
    grid: &mut Grid,
    words: &mut WordCollection,
    pending: &Pending<'_>,
    direction: Direction,
    start: Position,
    outcome: &mut AutoPlaceOutcome,
) -> Option<WordId> {
    let id = words.allocate_id();
    let mut word = match Word::new(id, &pending.text, pending.entry.clue.clone(), direction, start) {
        Ok(word) => word,
        Err(err) => {
            skip(outcome, pending.entry, SkipReason::InvalidText(err));
            return None;
        }
    };
    match place(grid, &word) {
        Ok(placement) => {
            word.set_number(Some(placement.number));
            log::debug!("placed {} {direction} at {start}", word.text());
            outcome.placed.push(word.clone());
            words.insert(word);
            Some(id)
        }
        Err(err) => {
            log::warn!("placement of {} failed after a passing check: {err}", word.text());
            skip(outcome, pending.entry, SkipReason::NoIntersection);
            None
        }
    }
}

fn skip(outcome: &mut AutoPlaceOutcome, entry: &WordEntry, reason: SkipReason) {
    log::debug!("skipped {:?}: {reason}", entry.text);
    outcome.skipped.push(SkippedEntry {
        entry: entry.clone(),
        reason,
    });
}
