//! Square grids that make up a game: the hidden manager board and the visible board.

use std::fmt::{self, Debug};

use crate::fleet::ShipIndex;

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, UniformCoordinate},
    dimensions::BoardSize,
    errors::{AllocationError, BoardSizeError},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Symbol printed for a cell nobody has touched.
pub const EMPTY_SYMBOL: char = '_';
/// Symbol printed for a revealed miss.
pub const MISS_SYMBOL: char = 'o';
/// Symbol printed for a revealed hit.
pub const HIT_SYMBOL: char = 'x';

/// Contents of a single board cell.
pub trait Cell: Debug + Copy + Default + Eq {
    /// Character used for this cell when the board is rendered.
    fn symbol(&self) -> char;

    /// Whether nothing has been recorded in this cell.
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Cell of the manager board: either open water or part of a ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ManagerCell {
    Empty,
    /// Occupied by the ship at this index in the fleet.
    Ship(ShipIndex),
}

impl Default for ManagerCell {
    fn default() -> Self {
        ManagerCell::Empty
    }
}

impl Cell for ManagerCell {
    fn symbol(&self) -> char {
        match self {
            ManagerCell::Empty => EMPTY_SYMBOL,
            ManagerCell::Ship(index) => {
                std::char::from_digit(index.get() as u32, 36).unwrap_or('#')
            }
        }
    }
}

/// Cell of the visible board. Never reveals which ship was hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VisibleCell {
    Empty,
    Hit,
    Miss,
}

impl Default for VisibleCell {
    fn default() -> Self {
        VisibleCell::Empty
    }
}

impl Cell for VisibleCell {
    fn symbol(&self) -> char {
        match self {
            VisibleCell::Empty => EMPTY_SYMBOL,
            VisibleCell::Hit => HIT_SYMBOL,
            VisibleCell::Miss => MISS_SYMBOL,
        }
    }
}

/// An N×N board of cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board<C> {
    grid: Grid<C>,
}

/// Hidden board recording which ship occupies each cell.
pub type ManagerBoard = Board<ManagerCell>;

/// Board shown to the player, recording only hits and misses.
pub type VisibleBoard = Board<VisibleCell>;

impl<C: Cell> Board<C> {
    /// Allocate a board of `size`×`size` cells, all empty.
    pub fn new(size: BoardSize) -> Result<Self, AllocationError> {
        Ok(Self {
            grid: Grid::new(size)?,
        })
    }

    /// Get the [`BoardSize`] of this board.
    pub fn size(&self) -> BoardSize {
        self.grid.size
    }

    /// Get the cell at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<C> {
        self.grid.get(coord).copied()
    }

    /// Overwrite the cell at the given coordinate. Returns `false` without touching the
    /// board if the coordinate is out of bounds.
    pub(crate) fn set(&mut self, coord: Coordinate, cell: C) -> bool {
        match self.grid.get_mut(coord) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over its
    /// cells from left to right.
    pub fn iter_rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = C>> {
        let grid = &self.grid;
        grid.size
            .iter_coordinates()
            .map(move |row| row.map(move |coord| grid[coord]))
    }

    /// Get an iterator over every cell paired with its coordinate, in row-major order.
    pub fn iter_cells(&self) -> impl '_ + Iterator<Item = (Coordinate, C)> {
        let size = self.grid.size;
        self.grid
            .cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (size.un_linearize(i), *cell))
    }

    /// Render the board as text: a header of 1-based column numbers followed by one
    /// line per row, labelled with its letter.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<C: Cell> fmt::Display for Board<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for col in 1..=self.size().get() {
            write!(f, ",{}", col)?;
        }
        writeln!(f)?;
        for (row, cells) in self.iter_rows().enumerate() {
            write!(f, "{}", Coordinate::row_letter(row).unwrap_or('?'))?;
            for cell in cells {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
