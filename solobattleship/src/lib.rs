//! Single-player Battleship against a randomly placed fleet.
//!
//! [`board`] provides the square grids: the hidden manager board that records which
//! ship occupies each cell and the visible board that only records hits and misses.
//!
//! [`ships`] and [`fleet`] define the fixed roster of five ships and place them on the
//! manager board by rejection sampling.
//!
//! [`turn`] resolves a single shot against the boards and the fleet, and [`game`] drives
//! turns until every ship is sunk or the player quits.

pub mod board;
pub mod fleet;
pub mod game;
pub mod ships;
pub mod turn;

pub use crate::{
    board::{BoardSize, Coordinate, ManagerBoard, VisibleBoard},
    fleet::{place_fleet, Fleet, ShipIndex},
    game::{GameState, Session, Termination},
    turn::{resolve_turn, TurnOutcome},
};
