//! The rectangular cell matrix.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Cell, Position, WordId};

/// Errors raised by grid construction and access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A dimension lies outside `[MIN_DIMENSION, MAX_DIMENSION]`.
    #[display("invalid grid size {width}x{height} (each dimension must be within 5..=25)")]
    InvalidSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A position lies outside the grid.
    #[display("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
    /// Rows of different lengths were supplied.
    #[display("row {row} has {len} cells, expected {width}")]
    NotRectangular {
        /// Index of the first mismatching row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of the first row.
        width: usize,
    },
}

/// A `height x width` matrix of [`Cell`]s stored row-major.
///
/// The grid also owns the clue-number counter: numbers are handed out monotonically as start
/// cells are created and are never reassigned when words are removed.
///
/// # Examples
///
/// ```
/// use crosslace_core::{Grid, GridError, Position};
///
/// let mut grid = Grid::new(5, 7)?;
/// assert_eq!((grid.width(), grid.height()), (5, 7));
///
/// grid.block(Position::new(0, 0))?;
/// assert!(grid.get(Position::new(0, 0))?.is_blocked());
/// assert!(matches!(grid.get(Position::new(7, 0)), Err(GridError::OutOfBounds { .. })));
///
/// assert!(Grid::new(4, 10).is_err());
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid", into = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next_number: u32,
}

/// Row-based serialized form of [`Grid`].
#[derive(Serialize, Deserialize)]
struct RawGrid {
    rows: Vec<Vec<Cell>>,
    #[serde(default)]
    next_number: Option<u32>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let mut grid = Grid::from_rows(raw.rows)?;
        if let Some(next) = raw.next_number {
            grid.next_number = grid.next_number.max(next);
        }
        Ok(grid)
    }
}

impl From<Grid> for RawGrid {
    fn from(grid: Grid) -> Self {
        let next_number = Some(grid.next_number);
        let width = grid.width.max(1);
        let rows = if grid.width == 0 {
            Vec::new()
        } else {
            grid.cells.chunks(width).map(<[Cell]>::to_vec).collect()
        };
        Self { rows, next_number }
    }
}

impl Grid {
    /// Smallest allowed width or height.
    pub const MIN_DIMENSION: usize = 5;
    /// Largest allowed width or height.
    pub const MAX_DIMENSION: usize = 25;

    /// Creates a grid of empty, unblocked cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if either dimension is outside
    /// `[MIN_DIMENSION, MAX_DIMENSION]`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if !Self::is_valid_dimension(width) || !Self::is_valid_dimension(height) {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); width * height],
            next_number: 1,
        })
    }

    /// Builds a grid from explicit rows.
    ///
    /// Only rectangularity is enforced; the size policy is not, so grids reconstituted from
    /// external data can still be inspected and validated.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotRectangular`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != width)
        {
            return Err(GridError::NotRectangular {
                row,
                len: cells.len(),
                width,
            });
        }
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let next_number = cells
            .iter()
            .filter_map(Cell::number)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Ok(Self {
            width: if height == 0 { 0 } else { width },
            height: if width == 0 { 0 } else { height },
            cells,
            next_number,
        })
    }

    /// Returns `true` if `value` is an allowed width or height.
    #[must_use]
    #[inline]
    pub const fn is_valid_dimension(value: usize) -> bool {
        value >= Self::MIN_DIMENSION && value <= Self::MAX_DIMENSION
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `width * height`.
    #[must_use]
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the backing storage holds exactly `width * height` cells.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.cells.len() == self.width * self.height
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.width + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn get(&self, pos: Position) -> Result<&Cell, GridError> {
        let index = self.index(pos)?;
        Ok(&self.cells[index])
    }

    /// Returns the cell at `pos` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut Cell, GridError> {
        let index = self.index(pos)?;
        Ok(&mut self.cells[index])
    }

    /// Blocks the cell at `pos`, clearing its letter, number and word references.
    ///
    /// Returns the ids of words that referenced the cell. Those words are left dangling in the
    /// grid; use the puzzle session to retract them first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn block(&mut self, pos: Position) -> Result<Vec<WordId>, GridError> {
        Ok(self.get_mut(pos)?.block())
    }

    /// Unblocks the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` lies outside the grid.
    pub fn unblock(&mut self, pos: Position) -> Result<(), GridError> {
        self.get_mut(pos)?.unblock();
        Ok(())
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Iterates over `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.positions().zip(&self.cells)
    }

    /// Iterates over `(position, cell)` pairs mutably in row-major order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (Position, &mut Cell)> {
        self.positions().zip(&mut self.cells)
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Returns `true` if any cell references a word.
    #[must_use]
    pub fn has_words(&self) -> bool {
        self.cells.iter().any(|cell| !cell.entries().is_empty())
    }

    /// Hands out the next clue number.
    pub fn allocate_number(&mut self) -> u32 {
        let number = self.next_number;
        self.next_number = self.next_number.saturating_add(1);
        number
    }

    /// Returns the number the next start cell will receive.
    #[must_use]
    pub fn peek_next_number(&self) -> u32 {
        self.next_number
    }

    /// Clears every cell number and restarts the counter at 1.
    pub fn reset_numbering(&mut self) {
        for cell in &mut self.cells {
            cell.set_number(None);
        }
        self.next_number = 1;
    }
}

impl fmt::Display for Grid {
    /// Renders one line per row: letters, `#` for blocked cells and `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                let ch = if cell.is_blocked() {
                    '#'
                } else {
                    cell.letter().unwrap_or('.')
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
