//! Tests for the tic-tac-toe engine operations.

use strictly_minimax::{
    Board, InvalidActionError, Player, Position, Square, apply, best_action, current_player,
    initial_board, is_terminal, legal_actions, rules, utility, winner,
};

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

#[test]
fn test_initial_board_is_empty() {
    let board = initial_board();
    assert_eq!(board.empty_count(), 9);
    assert!(!is_terminal(&board));
    assert_eq!(legal_actions(&board).map(|a| a.len()), Some(9));
}

#[test]
fn test_x_moves_first() {
    assert_eq!(current_player(&initial_board()), Some(Player::X));
}

#[test]
fn test_apply_places_current_players_mark() {
    let after_x = apply(&initial_board(), Position::Center).unwrap();
    assert_eq!(after_x.get(Position::Center), Square::Occupied(Player::X));

    let after_o = apply(&after_x, Position::TopLeft).unwrap();
    assert_eq!(after_o.get(Position::TopLeft), Square::Occupied(Player::O));
}

#[test]
fn test_apply_does_not_mutate_input() {
    let original = board("X..|.O.|...");
    let snapshot = original;
    let next = apply(&original, Position::BottomRight).unwrap();
    assert_eq!(original, snapshot);
    assert_ne!(original, next);
}

#[test]
fn test_apply_occupied_square_fails() {
    let board = apply(&initial_board(), Position::Center).unwrap();
    let result = apply(&board, Position::Center);
    assert_eq!(result, Err(InvalidActionError::Occupied(Position::Center)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_out_of_bounds_action_is_rejected() {
    let err = Position::try_from((1, 3)).unwrap_err();
    assert_eq!(err, InvalidActionError::OutOfBounds { row: 1, col: 3 });
    assert!(err.to_string().contains("off the board"));
}

#[test]
fn test_is_terminal_on_win() {
    let won = board("OOO|XX.|XX.");
    assert_eq!(winner(&won), Some(Player::O));
    assert!(is_terminal(&won));
}

#[test]
fn test_is_terminal_on_full_board() {
    let full = board("XOX|XOO|OXX");
    assert_eq!(winner(&full), None);
    assert!(rules::is_full(&full));
    assert!(is_terminal(&full));
}

#[test]
fn test_not_terminal_mid_game() {
    assert!(!is_terminal(&board("XO.|.X.|..O")));
}

#[test]
fn test_winner_every_line() {
    for line in rules::LINES {
        for player in [Player::X, Player::O] {
            let board = line
                .iter()
                .fold(Board::new(), |b, &pos| b.with(pos, Square::Occupied(player)));
            assert_eq!(winner(&board), Some(player), "{line:?} for {player}");
        }
    }
}

#[test]
fn test_utility_values() {
    assert_eq!(utility(&board("XXX|OO.|...")), 1);
    assert_eq!(utility(&board("OOO|XX.|XX.")), -1);
    assert_eq!(utility(&board("XOX|XOO|OXX")), 0);
    assert_eq!(utility(&initial_board()), 0);
}

#[test]
fn test_best_action_opening_is_center() {
    assert_eq!(best_action(&initial_board()), Some(Position::Center));
}

#[test]
fn test_best_action_none_when_terminal() {
    assert_eq!(best_action(&board("XXX|OO.|...")), None);
    assert_eq!(best_action(&board("XOX|XOO|OXX")), None);
}

#[test]
fn test_x_takes_winning_square() {
    // X X .
    // . O .
    // O . .
    let board = board("XX.|.O.|O..");
    assert_eq!(current_player(&board), Some(Player::X));
    assert_eq!(best_action(&board), Some(Position::TopRight));
}

#[test]
fn test_x_completes_column() {
    // X O .
    // X O .
    // . . .
    let board = board("XO.|XO.|...");
    assert_eq!(current_player(&board), Some(Player::X));
    assert_eq!(best_action(&board), Some(Position::BottomLeft));
}

#[test]
fn test_o_blocks_threat() {
    // X X .
    // . O .
    // . . .
    let board = board("XX.|.O.|...");
    assert_eq!(current_player(&board), Some(Player::O));
    assert_eq!(best_action(&board), Some(Position::TopRight));
}

#[test]
fn test_o_blocks_column() {
    // X . .
    // . O .
    // X . .
    let board = board("X..|.O.|X..");
    assert_eq!(current_player(&board), Some(Player::O));
    assert_eq!(best_action(&board), Some(Position::MiddleLeft));
}

#[test]
fn test_o_prefers_winning_to_blocking() {
    // X X .
    // O O .
    // X . .
    let board = board("XX.|OO.|X..");
    assert_eq!(current_player(&board), Some(Player::O));
    assert_eq!(best_action(&board), Some(Position::MiddleRight));
}
