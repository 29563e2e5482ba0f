//! Actions and the errors raised when one cannot be applied.
//!
//! An action is just the position a mark goes on; whose mark it is
//! follows from the board. [`Move`] pairs the two for game records.

use super::{Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A legal action: an empty position for the player to move.
pub type Action = Position;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error raised when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The coordinates do not address a square on the board.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The board is terminal, so no player is to move.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidActionError {}
