use std::{convert::TryFrom, fmt};

use rand::{
    distributions::{
        uniform::{SampleBorrow, SampleUniform, UniformSampler},
        Distribution, Uniform,
    },
    Rng,
};

/// Zero-based position of a cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row of the cell, labelled `a`, `b`, ... when rendered.
    pub row: usize,
    /// Column of the cell, labelled from 1 when rendered.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Construct a [`Coordinate`] from signed input. Returns `None` if either part is
    /// negative, since such a coordinate can never be on the board.
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        Some(Self::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?))
    }

    /// Letter labelling the given row, if there is one.
    pub fn row_letter(row: usize) -> Option<char> {
        if row < 26 {
            Some((b'a' + row as u8) as char)
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    /// Formats as the player would type it, e.g. `c4` for row 2, column 3.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match Self::row_letter(self.row) {
            Some(letter) => write!(f, "{}{}", letter, self.col + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Samples coordinates uniformly from a rectangle, independently per axis.
#[derive(Debug, Copy, Clone)]
pub struct UniformCoordinate {
    row: Uniform<usize>,
    col: Uniform<usize>,
}

impl UniformSampler for UniformCoordinate {
    type X = Coordinate;

    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            row: Uniform::new(low.row, high.row),
            col: Uniform::new(low.col, high.col),
        }
    }

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        let (low, high) = (low.borrow(), high.borrow());
        Self {
            row: Uniform::new_inclusive(low.row, high.row),
            col: Uniform::new_inclusive(low.col, high.col),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Coordinate::new(self.row.sample(rng), self.col.sample(rng))
    }
}

impl SampleUniform for Coordinate {
    type Sampler = UniformCoordinate;
}
