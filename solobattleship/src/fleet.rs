//! The fixed fleet and its random placement on the manager board.

use std::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::{
    board::{AllocationError, BoardSize, ManagerBoard},
    ships::Ship,
};

pub use self::{
    errors::{CannotPlaceReason, PlaceError},
    setup::FleetSetup,
};

mod errors;
mod setup;

/// Number of ships in every fleet.
pub const FLEET_SIZE: usize = 5;

/// Random draws allowed for a single ship before falling back to a deterministic scan.
pub const MAX_RANDOM_DRAWS: usize = 10_000;

/// Fleets redrawn from scratch before switching to fully deterministic placement.
pub const MAX_FLEET_ATTEMPTS: usize = 64;

/// Stable position of a ship in the fleet roster.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShipIndex(usize);

impl ShipIndex {
    pub fn new(index: usize) -> Self {
        ShipIndex(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ShipIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// All ships of a game, indexed by [`ShipIndex`]. Ships are never removed; a sunk ship
/// stays in the fleet with zero health.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Number of ships in the fleet. Always [`FLEET_SIZE`] for a started fleet.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Get the ship with the given index, if any.
    pub fn get(&self, index: ShipIndex) -> Option<&Ship> {
        self.ships.get(index.get())
    }

    pub(crate) fn get_mut(&mut self, index: ShipIndex) -> Option<&mut Ship> {
        self.ships.get_mut(index.get())
    }

    /// Get an iterator over all ships along with their indices, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipIndex, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| (ShipIndex(i), ship))
    }

    /// Number of ships with no health left.
    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|ship| ship.sunk()).count()
    }
}

/// Randomly place the whole roster on a fresh manager board of the given size.
///
/// Each ship gets a uniformly random orientation and origin until one is in range and
/// does not overlap an earlier ship. A ship that is still unplaced after
/// [`MAX_RANDOM_DRAWS`] takes the first legal slot in column-major order, and if even
/// that fails the whole fleet is redrawn. After [`MAX_FLEET_ATTEMPTS`] redraws every ship
/// is placed by the deterministic scan, which on an empty board of at least
/// [`BoardSize::MIN`] always stacks the roster one ship per row.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: BoardSize,
) -> Result<(ManagerBoard, Fleet), AllocationError> {
    place_fleet_with(rng, MAX_RANDOM_DRAWS, MAX_FLEET_ATTEMPTS, || {
        FleetSetup::new(size)
    })
}

/// Placement loop behind [`place_fleet`]. `new_setup` supplies the board for every
/// attempt.
fn place_fleet_with<R, F>(
    rng: &mut R,
    max_draws: usize,
    max_attempts: usize,
    mut new_setup: F,
) -> Result<(ManagerBoard, Fleet), AllocationError>
where
    R: Rng + ?Sized,
    F: FnMut() -> Result<FleetSetup, AllocationError>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        let mut setup = new_setup()?;
        let deterministic = attempt > max_attempts;
        if deterministic {
            warn!(
                "random placement failed {} times on a {} board, using first-fit layout",
                max_attempts,
                setup.size()
            );
        }
        while let Some(kind) = setup.pending() {
            let placed = if deterministic {
                setup.place_first_fit()
            } else {
                setup
                    .place_random(rng, max_draws)
                    .or_else(|_| setup.place_first_fit())
            };
            if let Err(err) = placed {
                warn!(
                    "{} for the {} on attempt {}, redrawing the fleet",
                    err,
                    kind.name(),
                    attempt
                );
                debug!("abandoned placement on:\n{}", setup.board());
                break;
            }
        }
        match setup.start() {
            Ok((board, fleet)) => {
                debug!("fleet placed after {} attempt(s):\n{}", attempt, board);
                return Ok((board, fleet));
            }
            Err(_) => continue,
        }
    }
}
