//! Tic-tac-toe game state.
//!
//! This crate tracks a single 3×3 game: whose turn it is, how many turns
//! have passed, and whether the game is over. Moves are validated against
//! the current state, wins are detected through the square that was just
//! played, and every accepted change is published to registered listeners.
//!
//! # Architecture
//!
//! - **Types**: players, squares, coordinates and the board
//! - **Rules**: win and draw detection
//! - **Listeners**: move-made, game-ended and game-restarted notifications
//! - **Invariants**: properties re-checked after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_state::{EventLog, GameEvent, GameState, Player, WinInfo};
//!
//! # fn main() -> Result<(), tictactoe_state::GameError> {
//! let mut game = GameState::new();
//! let log = EventLog::new();
//! game.subscribe(Box::new(log.clone()));
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.make_move(row, col)?;
//! }
//! let outcome = game.make_move(0, 2)?;
//!
//! assert!(game.is_game_over());
//! assert_eq!(outcome.result().and_then(|r| r.win_info()), Some(WinInfo::Row(0)));
//! assert_eq!(outcome.result().and_then(|r| r.winner()), Some(Player::X));
//! assert!(matches!(log.events().last(), Some(GameEvent::GameEnded(_))));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod listener;
mod outcome;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome, Rejection};
pub use contracts::{CellIsEmpty, GameNotOver, LegalMove};
pub use error::GameError;
pub use game::{GameSnapshot, GameState};
pub use listener::{EventLog, GameEvent, GameListener, ListenerId, Listeners};
pub use outcome::{GameResult, WinInfo, WinKind};
pub use types::{BOARD_SIZE, Board, Coord, Player, SQUARE_COUNT, Square};
