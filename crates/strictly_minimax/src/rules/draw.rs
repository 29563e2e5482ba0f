//! Draw and terminal-state detection for tic-tac-toe.

use super::super::{Board, Outcome, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

/// The game is over once someone has won or no empty square remains.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Outcome of a terminal board, `None` while play continues.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match check_winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX|OXX|OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins top row
        let board: Board = "XXX|OO.|...".parse().unwrap();
        assert!(!is_draw(&board));
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_full_board_with_winner() {
        // X O X / X O O / X X O  (X owns the left column)
        let board: Board = "XOX|XOO|XXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::X)));
    }
}
