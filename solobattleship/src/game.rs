//! A single game session: owns both boards and the fleet and drives turns until every
//! ship is sunk or the player quits.

use log::{debug, info};
use rand::Rng;

use crate::{
    board::{AllocationError, BoardSize, Coordinate, ManagerBoard, VisibleBoard},
    fleet::{place_fleet, Fleet, FleetSetup, FLEET_SIZE},
    turn::{resolve_turn, TurnOutcome},
};

pub use self::errors::{SessionOver, SetupError};

mod errors;

/// State of a [`Session`]. `Won` and `Quit` are terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameState {
    AwaitingMove,
    Won,
    Quit,
}

impl GameState {
    /// Whether no further moves will be accepted.
    pub fn is_over(self) -> bool {
        self != GameState::AwaitingMove
    }
}

/// How the program ended. Each variant maps to a distinct process exit code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Termination {
    /// The player quit, or the session ended without every ship sunk.
    Quit,
    /// Every ship was sunk.
    Won,
    /// Storage for the boards or the fleet could not be obtained.
    AllocationFailure,
    /// The requested board size was not usable.
    InvalidConfiguration,
}

impl Termination {
    /// Process exit code for this termination.
    pub fn code(self) -> i32 {
        match self {
            Termination::Quit => 0,
            Termination::Won => 1,
            Termination::AllocationFailure => 2,
            Termination::InvalidConfiguration => 3,
        }
    }
}

impl From<AllocationError> for Termination {
    fn from(_: AllocationError) -> Self {
        Termination::AllocationFailure
    }
}

/// Handles gameplay for one player against one hidden fleet.
#[derive(Debug)]
pub struct Session {
    /// Hidden board with ship positions.
    manager: ManagerBoard,

    /// Board shown to the player.
    visible: VisibleBoard,

    /// The fleet being hunted.
    fleet: Fleet,

    /// Number of ships sunk so far. Only changed by [`resolve_turn`].
    sunk_count: usize,

    state: GameState,

    /// Number of moves submitted, including invalid ones.
    turns: usize,
}

impl Session {
    /// Start a game on a board of the given size with a randomly placed fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, size: BoardSize) -> Result<Self, AllocationError> {
        let (manager, fleet) = place_fleet(rng, size)?;
        let session = Self::from_parts(manager, fleet)?;
        info!("new game on a {} board", size);
        Ok(session)
    }

    /// Start a game from a fleet placed by hand. Fails if not every ship was placed.
    pub fn from_setup(setup: FleetSetup) -> Result<Self, SetupError> {
        let (manager, fleet) = setup.start().map_err(|setup| SetupError::IncompleteFleet {
            pending: setup.pending().map_or("nothing", |kind| kind.name()),
        })?;
        Ok(Self::from_parts(manager, fleet)?)
    }

    fn from_parts(manager: ManagerBoard, fleet: Fleet) -> Result<Self, AllocationError> {
        let visible = VisibleBoard::new(manager.size())?;
        Ok(Self {
            manager,
            visible,
            fleet,
            sunk_count: 0,
            state: GameState::AwaitingMove,
            turns: 0,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn size(&self) -> BoardSize {
        self.visible.size()
    }

    /// Board showing only the player's hits and misses.
    pub fn visible(&self) -> &VisibleBoard {
        &self.visible
    }

    /// Hidden board with every ship's position.
    pub fn manager(&self) -> &ManagerBoard {
        &self.manager
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Number of moves submitted so far, including rejected ones.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Fire at the given coordinate. The game is won once the last ship sinks.
    pub fn fire(&mut self, coord: Coordinate) -> Result<TurnOutcome, SessionOver> {
        self.check_open()?;
        self.turns += 1;
        let (sunk_count, outcome) = resolve_turn(
            coord,
            &self.manager,
            &mut self.visible,
            &mut self.fleet,
            self.sunk_count,
        );
        self.sunk_count = sunk_count;
        debug!("turn {}: {} -> {:?}", self.turns, coord, outcome);
        if self.sunk_count >= FLEET_SIZE {
            self.state = GameState::Won;
            info!("every ship sunk after {} turns", self.turns);
        }
        Ok(outcome)
    }

    /// Fire at a coordinate given as signed integers. Negative values are off the board
    /// and resolve as [`TurnOutcome::InvalidMove`].
    pub fn fire_signed(&mut self, row: i64, col: i64) -> Result<TurnOutcome, SessionOver> {
        match Coordinate::from_signed(row, col) {
            Some(coord) => self.fire(coord),
            None => {
                self.check_open()?;
                self.turns += 1;
                debug!("turn {}: ({}, {}) -> InvalidMove", self.turns, row, col);
                Ok(TurnOutcome::InvalidMove)
            }
        }
    }

    /// End the game at the player's request.
    pub fn quit(&mut self) -> Result<(), SessionOver> {
        self.check_open()?;
        self.state = GameState::Quit;
        info!(
            "player quit after {} turns with {} of {} ships sunk",
            self.turns, self.sunk_count, FLEET_SIZE
        );
        Ok(())
    }

    /// Tear down the session, releasing both boards and the fleet.
    pub fn finish(self) -> Termination {
        match self.state {
            GameState::Won => Termination::Won,
            GameState::Quit | GameState::AwaitingMove => Termination::Quit,
        }
    }

    fn check_open(&self) -> Result<(), SessionOver> {
        if self.state.is_over() {
            Err(SessionOver::new(self.state))
        } else {
            Ok(())
        }
    }
}
