//! Turn count invariant: one turn per marked square.

use super::Invariant;
use crate::GameState;

/// Invariant: `turns_passed` equals the number of occupied squares.
pub struct TurnCountInvariant;

impl Invariant<GameState> for TurnCountInvariant {
    fn holds(game: &GameState) -> bool {
        game.turns_passed() == game.board().filled_count()
    }

    fn description() -> &'static str {
        "Turns passed equals the number of marked squares"
    }
}
