//! Resolution of a single shot against the hidden fleet.

use log::{trace, warn};

use crate::{
    board::{Coordinate, ManagerBoard, ManagerCell, VisibleBoard, VisibleCell},
    fleet::{Fleet, ShipIndex},
};

/// Result of resolving one turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TurnOutcome {
    /// The coordinate is not on the board. Nothing changed.
    InvalidMove,
    /// The cell was already revealed as a hit or a miss. Nothing changed.
    AlreadyHit,
    /// The shot landed in open water.
    Miss,
    /// The given ship was hit but still has health left.
    Hit(ShipIndex),
    /// The given ship was hit and has now sunk.
    Sunk(ShipIndex),
}

impl TurnOutcome {
    /// Get the index of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipIndex> {
        match *self {
            TurnOutcome::Hit(index) | TurnOutcome::Sunk(index) => Some(index),
            _ => None,
        }
    }

    /// Whether this turn revealed a new cell on the visible board.
    pub fn revealed(&self) -> bool {
        match self {
            TurnOutcome::InvalidMove | TurnOutcome::AlreadyHit => false,
            TurnOutcome::Miss | TurnOutcome::Hit(_) | TurnOutcome::Sunk(_) => true,
        }
    }
}

/// Resolve a shot at `coord`, returning the updated sunk count and the outcome.
///
/// Checks run in priority order: out of bounds, already revealed on the visible board,
/// open water on the manager board, then a hit on the occupying ship. A cell can only be
/// resolved once, so a ship never loses health twice for the same cell.
pub fn resolve_turn(
    coord: Coordinate,
    manager: &ManagerBoard,
    visible: &mut VisibleBoard,
    fleet: &mut Fleet,
    sunk_count: usize,
) -> (usize, TurnOutcome) {
    match visible.get(coord) {
        None => {
            trace!("{:?} is off the board", coord);
            return (sunk_count, TurnOutcome::InvalidMove);
        }
        Some(VisibleCell::Empty) => {}
        Some(_) => {
            trace!("{} was already revealed", coord);
            return (sunk_count, TurnOutcome::AlreadyHit);
        }
    }
    let index = match manager.get(coord) {
        Some(ManagerCell::Ship(index)) => index,
        Some(ManagerCell::Empty) => {
            visible.set(coord, VisibleCell::Miss);
            trace!("{} is a miss", coord);
            return (sunk_count, TurnOutcome::Miss);
        }
        None => {
            warn!("{} is on the visible board but not the manager board", coord);
            return (sunk_count, TurnOutcome::InvalidMove);
        }
    };
    let ship = match fleet.get_mut(index) {
        Some(ship) => ship,
        None => {
            warn!("{} is marked with unknown ship {}", coord, index);
            return (sunk_count, TurnOutcome::InvalidMove);
        }
    };
    visible.set(coord, VisibleCell::Hit);
    let health = ship.take_hit();
    trace!(
        "{} hit the {} ({} health left)",
        coord,
        ship.kind().name(),
        health
    );
    if health == 0 {
        (sunk_count + 1, TurnOutcome::Sunk(index))
    } else {
        (sunk_count, TurnOutcome::Hit(index))
    }
}
