//! Headless replay of tic-tac-toe match scripts.
//!
//! Loads a TOML script of moves and resets, plays it through
//! [`tictactoe_state::GameState`], and reports every notification the game
//! published along with its final state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod runner;
mod script;

pub use error::ScriptError;
pub use runner::{ReplayReport, replay};
pub use script::{Expected, MatchScript, Step};
