//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the game
/// runs, the player to move is the one after the last mover; once it is
/// over, the player to move stays the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        match history.last() {
            None => game.current_player() == Player::X,
            Some(last) if game.is_game_over() => game.current_player() == last.player,
            Some(last) => game.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        let mut expected = Player::X;
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(game.current_player(), expected);
            game.make_move(row, col).unwrap();
            expected = expected.opponent();
            assert!(AlternatingTurnInvariant::holds(&game));
        }
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = GameState::new();
        game.make_move(1, 1).unwrap();
        game.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
