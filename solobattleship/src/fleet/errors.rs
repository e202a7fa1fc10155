//! Errors used by [`FleetSetup`](super::FleetSetup).

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Orientation};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Some of the ship's cells would fall off the board.
    #[error("the ship does not fit on the board at the specified position")]
    OutOfRange,
    /// The space selected overlaps a ship that was already placed.
    #[error("the specified position was already occupied")]
    AlreadyOccupied,
    /// Every ship in the roster has already been placed.
    #[error("the whole fleet was already placed")]
    FleetComplete,
    /// No legal position was found.
    #[error("no room left for the ship")]
    NoRoom,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship at {origin} ({orientation:?}): {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    origin: Coordinate,
    orientation: Orientation,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the attempted placement.
    pub(super) fn new(
        reason: CannotPlaceReason,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Self {
        Self {
            reason,
            origin,
            orientation,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the origin where placement was attempted.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Get the orientation that was attempted.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
