//! Kani arbitrary implementations and proof harnesses.
//!
//! Compiled only under `cargo kani`.

use super::{Board, Player, Position, Square, engine};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Position::ALL[index]
    }
}

impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let rows: [[Square; 3]; 3] = [
            [kani::any(), kani::any(), kani::any()],
            [kani::any(), kani::any(), kani::any()],
            [kani::any(), kani::any(), kani::any()],
        ];
        Board::from_rows(rows)
    }
}

/// Applying an action never breaks the mark-count balance and never
/// touches the input board.
#[kani::proof]
fn verify_apply_preserves_consistency() {
    let board: Board = kani::any();
    kani::assume(board.is_consistent());
    let before = board;
    let action: Position = kani::any();

    if let Ok(next) = engine::apply(&board, action) {
        assert!(next.is_consistent());
        assert_eq!(board, before);
        assert_eq!(next.empty_count() + 1, board.empty_count());
    }
}

/// `utility` is non-zero exactly when there is a winner.
#[kani::proof]
fn verify_utility_matches_winner() {
    let board: Board = kani::any();
    let score = engine::utility(&board);
    match engine::winner(&board) {
        Some(Player::X) => assert_eq!(score, 1),
        Some(Player::O) => assert_eq!(score, -1),
        None => assert_eq!(score, 0),
    }
}
