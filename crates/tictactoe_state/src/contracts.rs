//! Move preconditions and post-move invariant checks.
//!
//! Preconditions decide whether a move is legal. A failed precondition is a
//! [`Rejection`], not an error: the caller ignores the move.

use crate::action::Rejection;
use crate::game::GameState;
use crate::invariants::{GameStateInvariants, InvariantSet};
use crate::types::Coord;
use tracing::{error, instrument};

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the game has been won or drawn.
    pub fn check(game: &GameState) -> Result<(), Rejection> {
        if game.is_game_over() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails if `coord` already holds a mark.
    pub fn check(game: &GameState, coord: Coord) -> Result<(), Rejection> {
        if game.board().is_empty(coord) {
            Ok(())
        } else {
            Err(Rejection::Occupied(coord))
        }
    }
}

/// Composite precondition: a move is legal if the game is running and the
/// square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(game))]
    pub fn check(game: &GameState, coord: Coord) -> Result<(), Rejection> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(game, coord)?;
        Ok(())
    }
}

/// Asserts that all game invariants hold (debug builds only).
pub(crate) fn assert_invariants(game: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameStateInvariants::check_all(game)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Game state invariants violated");
        panic!("Game state invariants violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_square_is_legal() {
        let game = GameState::new();
        assert_eq!(LegalMove::check(&game, Coord::at(1, 1)), Ok(()));
    }

    #[test]
    fn test_occupied_square_is_rejected() {
        let mut game = GameState::new();
        game.make_move(1, 1).unwrap();
        assert_eq!(
            LegalMove::check(&game, Coord::at(1, 1)),
            Err(Rejection::Occupied(Coord::at(1, 1)))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.make_move(row, col).unwrap();
        }
        assert_eq!(
            LegalMove::check(&game, Coord::at(0, 0)),
            Err(Rejection::GameOver)
        );
        assert_eq!(
            LegalMove::check(&game, Coord::at(2, 2)),
            Err(Rejection::GameOver)
        );
    }
}
