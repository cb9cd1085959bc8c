//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every mutation.
//! The game state re-checks the full set in debug builds; they can also be
//! checked independently.

pub mod alternating_turn;
pub mod history_consistent;
pub mod terminal_state;
pub mod turn_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use terminal_state::TerminalStateInvariant;
pub use turn_count::TurnCountInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// All game state invariants as a composable set.
pub type GameStateInvariants = (
    TurnCountInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    TerminalStateInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameState, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(GameStateInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_reset() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2)] {
            game.make_move(row, col).unwrap();
            assert!(GameStateInvariants::check_all(&game).is_ok());
        }
        game.reset();
        assert!(GameStateInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_untracked_mark() {
        let mut game = GameState::new();
        game.make_move(1, 1).unwrap();

        // Mark a square behind the game's back.
        game.board.set(Coord::at(0, 0), Square::Occupied(Player::O));

        let violations = GameStateInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(
            violations
                .iter()
                .any(|v| v.description == TurnCountInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();
        type TwoInvariants = (TurnCountInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
