//! Storage shared by the manager and visible boards.

use std::{
    borrow::Borrow,
    ops::Index,
};

use crate::board::{AllocationError, BoardSize, Coordinate};

/// Row-major grid of cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid<C> {
    /// Side length of the grid.
    pub(super) size: BoardSize,
    /// Cells that make up this grid.
    pub(super) cells: Box<[C]>,
}

impl<C: Copy + Default> Grid<C> {
    /// Allocate a grid with every cell set to its default value.
    pub(super) fn new(size: BoardSize) -> Result<Self, AllocationError> {
        let total = size.total_size();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| AllocationError::new(total))?;
        cells.resize(total, C::default());
        Ok(Self {
            size,
            cells: cells.into_boxed_slice(),
        })
    }
}

impl<C> Grid<C> {
    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&C> {
        self.size
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut C> {
        self.size
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl<C, B: Borrow<Coordinate>> Index<B> for Grid<C> {
    type Output = C;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}
