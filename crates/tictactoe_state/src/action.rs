//! Moves and what became of them.

use crate::outcome::GameResult;
use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// An accepted turn: a player placing their mark on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// The square that was marked.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Why an in-range move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The square is already marked.
    #[display("Square {} is already occupied", _0)]
    Occupied(Coord),
}

/// What a call to `make_move` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied; the other player is now to move.
    Continued,
    /// Move applied and it ended the game.
    Ended(GameResult),
    /// Move ignored; nothing changed and nothing was published.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// True if the move was applied to the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// The final result if this move ended the game.
    pub fn result(&self) -> Option<GameResult> {
        match self {
            MoveOutcome::Ended(result) => Some(*result),
            _ => None,
        }
    }
}
