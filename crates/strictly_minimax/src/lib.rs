//! Strictly Minimax - tic-tac-toe rules and a perfect-play engine
//!
//! The engine searches the whole game tree with plain minimax and never
//! loses. Boards are immutable values; every operation is a pure function
//! of the board it is handed.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: win, draw and terminal detection
//! - **Engine**: turn order, legal actions, [`apply`] and [`best_action`]
//! - **Self-play**: engine-versus-engine games recorded move by move
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Position, apply, best_action, initial_board, is_terminal};
//!
//! let board = initial_board();
//! assert_eq!(best_action(&board), Some(Position::Center));
//!
//! let board = apply(&board, Position::Center).unwrap();
//! let reply = best_action(&board).unwrap();
//! let board = apply(&board, reply).unwrap();
//! assert!(!is_terminal(&board));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod outcome;
mod position;
pub mod rules;
mod selfplay;
mod types;

#[cfg(kani)]
mod verification;

// Crate-level exports - Domain types
pub use action::{Action, InvalidActionError, Move};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, BoardParseError, Player, Square};

// Crate-level exports - Engine
pub use engine::{
    Evaluation, Minimax, OPENING_MOVE, Score, apply, best_action, current_player, initial_board,
    is_terminal, legal_actions, utility, winner,
};

// Crate-level exports - Self-play
pub use selfplay::{GameRecord, self_play};
