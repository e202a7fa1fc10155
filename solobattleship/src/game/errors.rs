use thiserror::Error;

use crate::{board::AllocationError, game::GameState};

/// Error returned when a session cannot be assembled.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// Storage for the visible board could not be obtained.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    /// The fleet setup still had ships waiting to be placed.
    #[error("fleet is incomplete, the {pending} has not been placed")]
    IncompleteFleet { pending: &'static str },
}

/// Error returned when trying to play after the game has ended.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("the game is already over ({state:?})")]
pub struct SessionOver {
    state: GameState,
}

impl SessionOver {
    pub(super) fn new(state: GameState) -> Self {
        Self { state }
    }

    /// The terminal state the session was in.
    pub fn state(&self) -> GameState {
        self.state
    }
}
