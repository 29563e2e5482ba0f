//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the search can call them on every node it visits; they
//! carry no tracing spans for that reason.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal, outcome};
pub use win::{LINES, check_winner};
