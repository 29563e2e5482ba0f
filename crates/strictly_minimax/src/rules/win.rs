//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns all three squares of some
/// line, `None` otherwise. Boards where both players own a line cannot
/// arise from play and are not checked for; the first such line wins.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let square = board.get(a);
        match square {
            Square::Occupied(player) if board.get(b) == square && board.get(c) == square => {
                Some(player)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: Board, positions: &[Position], player: Player) -> Board {
        positions
            .iter()
            .fold(board, |b, &pos| b.with(pos, Square::Occupied(player)))
    }

    fn assert_line_wins(line: usize) {
        let board = mark(Board::new(), &LINES[line], Player::X);
        assert_eq!(check_winner(&board), Some(Player::X), "line {line} for X");
        let board = mark(Board::new(), &LINES[line], Player::O);
        assert_eq!(check_winner(&board), Some(Player::O), "line {line} for O");
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_line_wins(0);
    }

    #[test]
    fn test_winner_middle_row() {
        assert_line_wins(1);
    }

    #[test]
    fn test_winner_bottom_row() {
        assert_line_wins(2);
    }

    #[test]
    fn test_winner_left_column() {
        assert_line_wins(3);
    }

    #[test]
    fn test_winner_center_column() {
        assert_line_wins(4);
    }

    #[test]
    fn test_winner_right_column() {
        assert_line_wins(5);
    }

    #[test]
    fn test_winner_main_diagonal() {
        assert_line_wins(6);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_line_wins(7);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = mark(Board::new(), &[Position::TopLeft, Position::TopCenter], Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = mark(Board::new(), &[Position::TopLeft, Position::TopCenter], Player::X);
        let board = mark(board, &[Position::TopRight], Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_two_lines_same_player() {
        // X X X
        // O X O
        // O O X   (X completes the top row and the main diagonal at once)
        let board: Board = "XXX|OXO|OOX".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
