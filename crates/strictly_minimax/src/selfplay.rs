//! Engine-versus-engine games.

use super::action::{InvalidActionError, Move};
use super::engine::{self, Minimax};
use super::rules;
use super::{Board, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A finished game: where it started, every move played and how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the game started from.
    pub start: Board,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Board after the last move.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
    /// Boards visited by the search across all moves.
    pub nodes: u64,
}

/// Plays [`engine::best_action`] for both sides from `start` until the
/// game ends.
///
/// # Errors
///
/// Returns [`InvalidActionError`] only if the engine proposes an illegal
/// move, which would indicate a bug in the search.
#[instrument(skip(start), fields(empty = start.empty_count()))]
pub fn self_play(start: Board) -> Result<GameRecord, InvalidActionError> {
    let mut board = start;
    let mut moves = Vec::new();
    let mut searcher = Minimax::new();

    loop {
        if let Some(outcome) = rules::outcome(&board) {
            info!(%outcome, moves = moves.len(), nodes = searcher.nodes(), "Self-play finished");
            return Ok(GameRecord {
                start,
                moves,
                board,
                outcome,
                nodes: searcher.nodes(),
            });
        }

        let player = engine::current_player(&board).ok_or(InvalidActionError::GameOver)?;
        let eval = searcher
            .evaluate(&board)
            .ok_or(InvalidActionError::GameOver)?;
        board = engine::apply(&board, eval.action)?;
        debug!(%player, action = %eval.action, "Engine moved");
        moves.push(Move::new(player, eval.action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_self_play_from_terminal_board_is_empty() {
        let board: Board = "XXX|OO.|...".parse().unwrap();
        let record = self_play(board).unwrap();
        assert!(record.moves.is_empty());
        assert_eq!(record.outcome, Outcome::Winner(Player::X));
        assert_eq!(record.board, board);
    }

    #[test]
    fn test_self_play_finishes_forced_win() {
        // X X .
        // . O .
        // O . .
        let board: Board = "XX.|.O.|O..".parse().unwrap();
        let record = self_play(board).unwrap();
        assert_eq!(record.moves, vec![Move::new(Player::X, Position::TopRight)]);
        assert_eq!(record.outcome, Outcome::Winner(Player::X));
    }
}
