//! Grid coordinates and word orientations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate, addressed as `(row, col)` from the top-left corner.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Direction, Position};
///
/// let start = Position::new(2, 3);
/// assert_eq!(start.step(Direction::Horizontal, 2), Some(Position::new(2, 5)));
/// assert_eq!(start.step(Direction::Vertical, 1), Some(Position::new(3, 3)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position `offset` cells away along `direction`.
    ///
    /// Returns `None` on arithmetic overflow. Bounds against a grid are not checked here.
    #[must_use]
    #[inline]
    pub fn step(self, direction: Direction, offset: usize) -> Option<Self> {
        match direction {
            Direction::Horizontal => Some(Self::new(self.row, self.col.checked_add(offset)?)),
            Direction::Vertical => Some(Self::new(self.row.checked_add(offset)?, self.col)),
        }
    }

    /// Returns the position `offset` cells back along `direction`, or `None` if that would
    /// leave the first row or column.
    #[must_use]
    #[inline]
    pub fn step_back(self, direction: Direction, offset: usize) -> Option<Self> {
        match direction {
            Direction::Horizontal => Some(Self::new(self.row, self.col.checked_sub(offset)?)),
            Direction::Vertical => Some(Self::new(self.row.checked_sub(offset)?, self.col)),
        }
    }

    /// Returns the orthogonal neighbours that do not underflow.
    ///
    /// Neighbours beyond the last row or column are included; callers filter them against the
    /// grid dimensions.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [
            self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Some(Self::new(self.row + 1, self.col)),
            self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Some(Self::new(self.row, self.col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The orientation of a word in the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right ("across").
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom ("down").
    #[display("vertical")]
    Vertical,
}

impl Direction {
    /// Both orientations, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the orientation crossing this one at a right angle.
    #[must_use]
    #[inline]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the single-flag set for this orientation.
    #[must_use]
    #[inline]
    pub const fn as_set(self) -> DirectionSet {
        match self {
            Self::Horizontal => DirectionSet::HORIZONTAL,
            Self::Vertical => DirectionSet::VERTICAL,
        }
    }
}

bitflags::bitflags! {
    /// The set of orientations occupying a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        /// A horizontal word passes through the cell.
        const HORIZONTAL = 0b01;
        /// A vertical word passes through the cell.
        const VERTICAL = 0b10;
    }
}

impl DirectionSet {
    /// Returns `true` if `direction` is in the set.
    #[must_use]
    #[inline]
    pub const fn has(self, direction: Direction) -> bool {
        self.contains(direction.as_set())
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.as_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_step_back_are_inverse() {
        let pos = Position::new(4, 7);
        for direction in Direction::ALL {
            let forward = pos.step(direction, 3).unwrap();
            assert_eq!(forward.step_back(direction, 3), Some(pos));
        }
        assert_eq!(Position::new(0, 2).step_back(Direction::Vertical, 1), None);
        assert_eq!(Position::new(2, 0).step_back(Direction::Horizontal, 1), None);
    }

    #[test]
    fn test_neighbors_skip_underflow() {
        let corner: Vec<_> = Position::new(0, 0).neighbors().collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);
        assert_eq!(Position::new(3, 3).neighbors().count(), 4);
    }

    #[test]
    fn test_direction_set_collects() {
        let set: DirectionSet = [Direction::Vertical, Direction::Vertical]
            .into_iter()
            .collect();
        assert!(set.has(Direction::Vertical));
        assert!(!set.has(Direction::Horizontal));
        assert_eq!(Direction::Horizontal.perpendicular(), Direction::Vertical);
    }
}
