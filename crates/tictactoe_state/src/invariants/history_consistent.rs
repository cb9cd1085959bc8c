//! History consistency invariant: the history describes the board.

use super::Invariant;
use crate::{GameState, Square};
use std::collections::HashSet;

/// Invariant: every recorded move is on the board, once.
///
/// The history is as long as the turn count, names distinct squares, and
/// each of those squares holds the recorded player's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        if history.len() != game.turns_passed() {
            return false;
        }

        let mut seen = HashSet::new();
        history.iter().all(|mv| {
            seen.insert(mv.coord) && game.board().get(mv.coord) == Square::Occupied(mv.player)
        })
    }

    fn description() -> &'static str {
        "Move history matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Player};

    #[test]
    fn test_history_matches_board() {
        let mut game = GameState::new();
        for (row, col) in [(0, 1), (1, 1), (2, 1)] {
            game.make_move(row, col).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::new();
        game.make_move(0, 1).unwrap();
        game.board.set(Coord::at(0, 1), Square::Occupied(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
