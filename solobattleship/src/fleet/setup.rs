//! Implements the placement phase of the fleet.

use log::debug;
use rand::{distributions::Uniform, Rng};

use crate::{
    board::{AllocationError, BoardSize, Cell, Coordinate, ManagerBoard, ManagerCell},
    fleet::{CannotPlaceReason, Fleet, PlaceError, ShipIndex, FLEET_SIZE},
    ships::{Orientation, ShapeProjection, Ship, ShipKind},
};

/// Placement phase for a [`Fleet`]. Ships are placed one at a time in roster order onto
/// a manager board; shooting is not possible until the fleet is started.
#[derive(Debug)]
pub struct FleetSetup {
    /// Manager board ships are stamped onto.
    pub(super) board: ManagerBoard,

    /// Ships placed so far, in roster order.
    ships: Vec<Ship>,
}

impl FleetSetup {
    /// Begin placement on a new, empty manager board of the given size.
    pub fn new(size: BoardSize) -> Result<Self, AllocationError> {
        let board = ManagerBoard::new(size)?;
        let mut ships = Vec::new();
        ships
            .try_reserve_exact(FLEET_SIZE)
            .map_err(|_| AllocationError::new(FLEET_SIZE))?;
        Ok(Self { board, ships })
    }

    /// Get the size of the board being set up.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// The manager board with every ship placed so far.
    pub fn board(&self) -> &ManagerBoard {
        &self.board
    }

    /// The next ship in the roster that still needs a position, if any.
    pub fn pending(&self) -> Option<ShipKind> {
        ShipKind::ROSTER.get(self.ships.len()).copied()
    }

    /// Checks if every ship in the roster has been placed.
    pub fn ready(&self) -> bool {
        self.pending().is_none()
    }

    /// Check whether the pending ship could go at the given position, without placing
    /// it. On success returns the cells it would cover.
    pub fn check_placement(
        &self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShapeProjection, CannotPlaceReason> {
        let kind = self.pending().ok_or(CannotPlaceReason::FleetComplete)?;
        let cells = kind
            .shape()
            .project(origin, orientation, self.size())
            .ok_or(CannotPlaceReason::OutOfRange)?;
        if cells
            .iter()
            .all(|coord| self.board.get(*coord).map_or(false, |cell| cell.is_empty()))
        {
            Ok(cells)
        } else {
            Err(CannotPlaceReason::AlreadyOccupied)
        }
    }

    /// Try to place the pending ship at the given position. Returns the index the ship
    /// was given in the fleet.
    pub fn place(
        &mut self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipIndex, PlaceError> {
        let cells = self
            .check_placement(origin, orientation)
            .map_err(|reason| PlaceError::new(reason, origin, orientation))?;
        let kind = self.pending().ok_or_else(|| {
            PlaceError::new(CannotPlaceReason::FleetComplete, origin, orientation)
        })?;
        let index = ShipIndex::new(self.ships.len());
        // Already ensured that every cell is on the board and unoccupied.
        for coord in cells {
            self.board.set(coord, ManagerCell::Ship(index));
        }
        self.ships.push(Ship::new(kind, origin, orientation));
        Ok(index)
    }

    /// Place the pending ship by drawing a uniformly random orientation and origin until
    /// the placement is legal, giving up after `max_draws` draws.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        max_draws: usize,
    ) -> Result<ShipIndex, PlaceError> {
        let size = self.size().get();
        let range = Uniform::new(Coordinate::new(0, 0), Coordinate::new(size, size));
        let mut last = (Coordinate::new(0, 0), Orientation::Horizontal);
        for draw in 1..=max_draws {
            let orientation = rng.gen();
            let origin = rng.sample(&range);
            last = (origin, orientation);
            match self.place(origin, orientation) {
                Ok(index) => {
                    debug!(
                        "placed ship {} at {} ({:?}) after {} draw(s)",
                        index, origin, orientation, draw
                    );
                    return Ok(index);
                }
                Err(err) if err.reason() == CannotPlaceReason::FleetComplete => return Err(err),
                Err(_) => {}
            }
        }
        Err(PlaceError::new(CannotPlaceReason::NoRoom, last.0, last.1))
    }

    /// Place the pending ship in the first legal slot: every origin in column-major order
    /// horizontally, then every origin vertically. On an empty board this stacks the
    /// roster one ship per row, each starting in the first column.
    pub fn place_first_fit(&mut self) -> Result<ShipIndex, PlaceError> {
        let size = self.size();
        for &orientation in Orientation::ALL {
            for origin in size.iter_coordinates_by_column() {
                match self.place(origin, orientation) {
                    Ok(index) => {
                        debug!(
                            "placed ship {} at {} ({:?}) by first fit",
                            index, origin, orientation
                        );
                        return Ok(index);
                    }
                    Err(err) if err.reason() == CannotPlaceReason::FleetComplete => {
                        return Err(err)
                    }
                    Err(_) => {}
                }
            }
        }
        Err(PlaceError::new(
            CannotPlaceReason::NoRoom,
            Coordinate::new(0, 0),
            Orientation::Horizontal,
        ))
    }

    /// Tries to finish placement. If every ship is placed, returns the manager board and
    /// the fleet, otherwise returns self.
    pub fn start(self) -> Result<(ManagerBoard, Fleet), Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok((self.board, Fleet { ships: self.ships }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(n: usize) -> FleetSetup {
        FleetSetup::new(BoardSize::new(n).unwrap()).unwrap()
    }

    #[test]
    fn places_in_roster_order() {
        let mut setup = setup(5);
        assert_eq!(setup.pending(), Some(ShipKind::AircraftCarrier));
        let index = setup
            .place(Coordinate::new(0, 0), Orientation::Horizontal)
            .unwrap();
        assert_eq!(index, ShipIndex::new(0));
        assert_eq!(setup.pending(), Some(ShipKind::BattleCruiser));
        assert_eq!(
            setup.board().get(Coordinate::new(0, 4)),
            Some(ManagerCell::Ship(index))
        );
    }

    #[test]
    fn rejects_out_of_range_then_overlap() {
        let mut setup = setup(5);
        let err = setup
            .place(Coordinate::new(1, 1), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfRange);
        assert_eq!(err.origin(), Coordinate::new(1, 1));
        assert_eq!(err.orientation(), Orientation::Horizontal);

        setup
            .place(Coordinate::new(0, 0), Orientation::Vertical)
            .unwrap();
        let before = setup.board().clone();
        let err = setup
            .place(Coordinate::new(2, 0), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(setup.board(), &before);
        assert_eq!(setup.pending(), Some(ShipKind::BattleCruiser));
    }

    #[test]
    fn start_requires_whole_fleet() {
        let mut setup = setup(6);
        setup
            .place(Coordinate::new(0, 0), Orientation::Horizontal)
            .unwrap();
        let mut setup = setup.start().unwrap_err();
        for _ in 1..FLEET_SIZE {
            setup.place_first_fit().unwrap();
        }
        assert!(setup.ready());
        let err = setup.place_first_fit().unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::FleetComplete);
        let (_, fleet) = setup.start().unwrap();
        assert_eq!(fleet.len(), FLEET_SIZE);
    }

    #[test]
    fn first_fit_stacks_ships_on_smallest_board() {
        let mut setup = setup(5);
        while !setup.ready() {
            setup.place_first_fit().unwrap();
        }
        let (board, fleet) = setup.start().unwrap();
        for (index, ship) in fleet.iter() {
            assert_eq!(ship.origin(), Coordinate::new(index.get(), 0));
            assert_eq!(ship.orientation(), Orientation::Horizontal);
        }
        assert_eq!(board.get(Coordinate::new(4, 2)), Some(ManagerCell::Empty));
    }

    #[test]
    fn first_fit_stacks_on_every_board_size() {
        for n in BoardSize::MIN..=BoardSize::MAX {
            let mut setup = setup(n);
            while !setup.ready() {
                setup.place_first_fit().unwrap();
            }
            let (_, fleet) = setup.start().unwrap();
            let origins: Vec<_> = fleet.iter().map(|(_, ship)| ship.origin()).collect();
            let expected: Vec<_> = (0..FLEET_SIZE).map(|row| Coordinate::new(row, 0)).collect();
            assert_eq!(origins, expected, "board size {}", n);
        }
    }

    #[test]
    fn first_fit_scans_down_a_column_first() {
        let mut setup = setup(6);
        setup
            .place(Coordinate::new(0, 0), Orientation::Vertical)
            .unwrap();
        // Column 0 is taken down to row 4, so the cruiser lands on the bottom row
        // before any origin in column 1 is tried.
        while !setup.ready() {
            setup.place_first_fit().unwrap();
        }
        let (_, fleet) = setup.start().unwrap();
        let cruiser = fleet.get(ShipIndex::new(1)).unwrap();
        assert_eq!(cruiser.origin(), Coordinate::new(5, 0));
        assert_eq!(cruiser.orientation(), Orientation::Horizontal);
        let missile_ship = fleet.get(ShipIndex::new(2)).unwrap();
        assert_eq!(missile_ship.origin(), Coordinate::new(0, 1));
    }

    #[test]
    fn first_fit_reports_no_room() {
        let mut setup = setup(5);
        let blocker = ManagerCell::Ship(ShipIndex::new(4));
        for i in 0..5 {
            setup.board.set(Coordinate::new(2, i), blocker);
            setup.board.set(Coordinate::new(i, 2), blocker);
        }
        let err = setup.place_first_fit().unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NoRoom);
    }

    #[test]
    fn random_placement_gives_up_after_draw_limit() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut setup = setup(5);
        // Block the middle row and column so a length-5 ship can never fit.
        for i in 0..5 {
            let blocker = ManagerCell::Ship(ShipIndex::new(4));
            setup.board.set(Coordinate::new(2, i), blocker);
            setup.board.set(Coordinate::new(i, 2), blocker);
        }
        let mut rng = StdRng::seed_from_u64(3);
        let err = setup.place_random(&mut rng, 50).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NoRoom);
        assert_eq!(setup.pending(), Some(ShipKind::AircraftCarrier));
    }
}
