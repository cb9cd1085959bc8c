//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The game state uses the
//! incremental check in [`win`] after each move; the full scans exist for
//! validating boards that did not come from a live game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{ALL_LINES, is_line_marked, winner_on, winning_line};
