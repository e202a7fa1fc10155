//! Types used for defining ships, their shapes and their health.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

pub use self::linear::Line;

mod linear;

/// Cells covered by a ship at a particular placement, starting from its origin.
pub type ShapeProjection = Vec<Coordinate>;

/// Direction a ship extends in from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends down the rows.
    Vertical,
    /// Extends along the columns.
    Horizontal,
}

impl Orientation {
    /// Every orientation, in the order deterministic placement tries them.
    pub const ALL: &'static [Orientation] = &[Orientation::Horizontal, Orientation::Vertical];

    /// Move `steps` cells from `coord` along this orientation. Returns `None` on overflow.
    pub fn advance(self, coord: Coordinate, steps: usize) -> Option<Coordinate> {
        match self {
            Orientation::Vertical => coord
                .row
                .checked_add(steps)
                .map(|row| Coordinate::new(row, coord.col)),
            Orientation::Horizontal => coord
                .col
                .checked_add(steps)
                .map(|col| Coordinate::new(coord.row, col)),
        }
    }
}

impl Distribution<Orientation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Ship types in the fleet roster.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Aircraft carrier: length 5.
    AircraftCarrier,
    /// Battlecruiser: length 4.
    BattleCruiser,
    /// Missile ship: length 3.
    MissileShip,
    /// Submarine: length 3.
    Submarine,
    /// Battleship: length 2.
    Battleship,
}

impl ShipKind {
    /// The fleet roster, largest ship first. Ships are placed in this order and the
    /// position in this list is the ship's fleet index.
    pub const ROSTER: &'static [ShipKind] = &[
        ShipKind::AircraftCarrier,
        ShipKind::BattleCruiser,
        ShipKind::MissileShip,
        ShipKind::Submarine,
        ShipKind::Battleship,
    ];

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::BattleCruiser => 4,
            ShipKind::MissileShip => 3,
            ShipKind::Submarine => 3,
            ShipKind::Battleship => 2,
        }
    }

    /// Human readable name of this ship type.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "aircraft carrier",
            ShipKind::BattleCruiser => "battlecruiser",
            ShipKind::MissileShip => "missile ship",
            ShipKind::Submarine => "submarine",
            ShipKind::Battleship => "battleship",
        }
    }

    /// Get the shape cooresponding to this ship type.
    pub fn shape(self) -> Line {
        Line::new(self.len())
    }
}

/// A placed ship and its remaining health.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    origin: Coordinate,
    orientation: Orientation,
    /// Number of this ship's cells that have not been hit yet.
    health: usize,
}

impl Ship {
    /// Construct a ship at full health. Placement must already have been validated.
    pub(crate) fn new(kind: ShipKind, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            kind,
            origin,
            orientation,
            health: kind.len(),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// Remaining health. Starts at [`len`](Self::len) and only ever decreases.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.health == 0
    }

    /// Get an iterator over the coordinates this ship occupies.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        self.kind.shape().cells(self.origin, self.orientation)
    }

    /// Record a hit on one of this ship's cells and return the remaining health.
    pub(crate) fn take_hit(&mut self) -> usize {
        debug_assert!(self.health > 0, "{:?} was hit after sinking", self.kind);
        self.health = self.health.saturating_sub(1);
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_lengths() {
        let lens: Vec<_> = ShipKind::ROSTER.iter().map(|kind| kind.len()).collect();
        assert_eq!(lens, vec![5, 4, 3, 3, 2]);
    }

    #[test]
    fn health_counts_down_and_stops_at_zero() {
        let mut ship = Ship::new(
            ShipKind::Battleship,
            Coordinate::new(0, 0),
            Orientation::Horizontal,
        );
        assert_eq!(ship.health(), 2);
        assert_eq!(ship.take_hit(), 1);
        assert!(!ship.sunk());
        assert_eq!(ship.take_hit(), 0);
        assert!(ship.sunk());
    }

    #[test]
    fn coords_follow_orientation() {
        let ship = Ship::new(
            ShipKind::MissileShip,
            Coordinate::new(1, 2),
            Orientation::Vertical,
        );
        let coords: Vec<_> = ship.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
                Coordinate::new(3, 2)
            ]
        );
    }
}
