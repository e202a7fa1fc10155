//! Errors raised while building boards.

use thiserror::Error;

use crate::board::BoardSize;

/// A board size that is not usable. This is a configuration error and is never retried.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum BoardSizeError {
    /// The size was a number but not in the allowed range.
    #[error(
        "board size {0} is outside the range [{min}, {max}]",
        min = BoardSize::MIN,
        max = BoardSize::MAX
    )]
    OutOfRange(i64),
    /// The size could not be read as a number at all.
    #[error("board size {0:?} is not a number")]
    NotANumber(String),
}

/// Storage for a grid or the fleet could not be obtained.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not allocate storage for {items} items")]
pub struct AllocationError {
    /// Number of items that were requested.
    items: usize,
}

impl AllocationError {
    /// Create an [`AllocationError`] for a request of `items` elements.
    pub(crate) fn new(items: usize) -> Self {
        Self { items }
    }
}
