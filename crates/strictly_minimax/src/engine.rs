//! Exhaustive minimax engine for tic-tac-toe.
//!
//! Every operation here is a pure function of the board it is given. X is
//! the maximising player and scores `1` for a win, O is the minimising
//! player and scores `-1`; a draw scores `0`.
//!
//! # Tie-breaking
//!
//! [`legal_actions`] yields positions in row-major order, and the search
//! keeps the first action that reaches the best value in that order. Among
//! several equally good moves, which one is chosen is an implementation
//! detail and callers should not rely on it.

use super::action::{Action, InvalidActionError};
use super::rules;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Minimax value of a position from X's point of view.
pub type Score = i8;

/// Move played on an empty board without searching.
pub const OPENING_MOVE: Position = Position::Center;

// ─────────────────────────────────────────────────────────────
//  Game queries
// ─────────────────────────────────────────────────────────────

/// Returns the starting board: nine empty squares.
pub fn initial_board() -> Board {
    Board::new()
}

/// Returns the player whose turn it is, or `None` once the game is over.
///
/// Derived from the number of empty squares: X moves first, so an odd
/// count means X is to move and an even count means O is.
pub fn current_player(board: &Board) -> Option<Player> {
    if is_terminal(board) {
        return None;
    }
    if board.empty_count() % 2 == 0 {
        Some(Player::O)
    } else {
        Some(Player::X)
    }
}

/// Returns every empty position, or `None` once the game is over.
///
/// `None` is distinct from an empty set: a terminal board has no player to
/// move at all.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Option<BTreeSet<Action>> {
    if is_terminal(board) {
        return None;
    }
    Some(Position::valid_moves(board).into_iter().collect())
}

/// Returns the board after the player to move marks `action`.
///
/// The input board is left as it was.
///
/// # Errors
///
/// - [`InvalidActionError::GameOver`] if the board is terminal.
/// - [`InvalidActionError::Occupied`] if the square is taken.
///
/// Out-of-range coordinates are rejected earlier, when they are converted
/// into a [`Position`].
///
/// A terminal board is an error rather than being handed back unchanged:
/// with nobody to move there is no mark to place.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    let player = current_player(board).ok_or(InvalidActionError::GameOver)?;
    if !board.is_empty(action) {
        return Err(InvalidActionError::Occupied(action));
    }
    let next = board.with(action, Square::Occupied(player));
    debug_assert!(next.is_consistent(), "mark counts diverged after {action:?}");
    Ok(next)
}

/// Returns the player owning a complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    rules::check_winner(board)
}

/// True once someone has won or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    rules::is_terminal(board)
}

/// Scores a board: `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Meant for terminal boards, but any board is accepted: one with no
/// winner yet scores `0` like a draw.
pub fn utility(board: &Board) -> Score {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Returns the optimal action for the player to move, or `None` once the
/// game is over.
///
/// On an empty board this is always [`OPENING_MOVE`]; every other board is
/// searched to the end of the game.
#[instrument(level = "debug", skip(board), fields(empty = board.empty_count()))]
pub fn best_action(board: &Board) -> Option<Action> {
    Minimax::new().evaluate(board).map(|eval| eval.action)
}

// ─────────────────────────────────────────────────────────────
//  Search
// ─────────────────────────────────────────────────────────────

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The chosen action.
    pub action: Action,
    /// Minimax value reached by the action, `None` for the opening move,
    /// which is played without searching.
    pub value: Option<Score>,
    /// Number of boards visited to reach the decision.
    pub nodes: u64,
}

/// Plain minimax searcher.
///
/// Holds nothing but a visited-node counter, so a fresh searcher per
/// decision is as good as a reused one.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Boards visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the best action for the player to move along with its value.
    ///
    /// X takes the first action with the highest `min_value` of its
    /// successor; O takes the first with the lowest `max_value`.
    #[instrument(level = "debug", skip(self, board), fields(empty = board.empty_count()))]
    pub fn evaluate(&mut self, board: &Board) -> Option<Evaluation> {
        let player = current_player(board)?;
        let start = self.nodes;

        if board.empty_count() == 9 {
            debug!(action = ?OPENING_MOVE, "Playing fixed opening move");
            return Some(Evaluation {
                action: OPENING_MOVE,
                value: None,
                nodes: 0,
            });
        }

        let mut best: Option<(Action, Score)> = None;
        for (action, next) in successors(*board) {
            let value = match player {
                Player::X => self.min_value(&next),
                Player::O => self.max_value(&next),
            };
            trace!(?action, value, "Evaluated action");

            let improves = match best {
                None => true,
                Some((_, best_value)) => match player {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }

        let (action, value) = best?;
        let nodes = self.nodes - start;
        debug!(?player, ?action, value, nodes, "Search complete");
        Some(Evaluation {
            action,
            value: Some(value),
            nodes,
        })
    }

    fn max_value(&mut self, board: &Board) -> Score {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        successors(*board)
            .map(|(_, next)| self.min_value(&next))
            .fold(Score::MIN, Score::max)
    }

    fn min_value(&mut self, board: &Board) -> Score {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        successors(*board)
            .map(|(_, next)| self.max_value(&next))
            .fold(Score::MAX, Score::min)
    }
}

/// Every legal action paired with the board it leads to, in row-major order.
///
/// Yields nothing on a terminal board.
fn successors(board: Board) -> impl Iterator<Item = (Action, Board)> {
    let mark = current_player(&board).map(Square::Occupied);
    Position::ALL
        .into_iter()
        .filter(move |pos| board.is_empty(*pos))
        .filter_map(move |pos| mark.map(|mark| (pos, board.with(pos, mark))))
}
