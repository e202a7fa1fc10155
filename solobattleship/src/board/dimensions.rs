use std::{convert::TryFrom, fmt, str::FromStr};

use crate::board::{BoardSizeError, Coordinate};

/// Side length of a square board, guaranteed to be in `[MIN, MAX]`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported board. Always has room for the whole fleet.
    pub const MIN: usize = 5;
    /// Largest supported board, limited by the number of row letters.
    pub const MAX: usize = 26;

    /// Validate `size` as a board size.
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(BoardSize(size))
        } else {
            Err(BoardSizeError::OutOfRange(
                i64::try_from(size).unwrap_or(i64::max_value()),
            ))
        }
    }

    /// Get the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    pub fn total_size(self) -> usize {
        self.0 * self.0
    }

    /// Check if the given [`Coordinate`] lies on the board.
    pub fn contains(self, coord: &Coordinate) -> bool {
        coord.row < self.0 && coord.col < self.0
    }

    /// Convert a coordinate to a row-major index. Returns `None` if the coordinate is out
    /// of bounds.
    pub fn try_linearize(self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.0 + coord.col)
        } else {
            None
        }
    }

    /// Get back a coordinate from a row-major index.
    pub fn un_linearize(self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.0, idx % self.0)
    }

    /// Get an iterator over rows of this board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.0;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterate every coordinate on the board column by column, top to bottom.
    pub fn iter_coordinates_by_column(self) -> impl Iterator<Item = Coordinate> {
        let size = self.0;
        (0..size).flat_map(move |col| (0..size).map(move |row| Coordinate::new(row, col)))
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        usize::try_from(size)
            .map_err(|_| BoardSizeError::OutOfRange(size))
            .and_then(BoardSize::new)
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    /// Parse a board size typed by the player. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let size: i64 = trimmed
            .parse()
            .map_err(|_| BoardSizeError::NotANumber(trimmed.to_owned()))?;
        BoardSize::try_from(size)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
