//! Terminal state invariant: "over" means there is a result, and it is true.

use super::Invariant;
use crate::{GameResult, GameState, rules};

/// Invariant: the game is over exactly when it has a result, and the
/// result agrees with the board.
pub struct TerminalStateInvariant;

impl Invariant<GameState> for TerminalStateInvariant {
    fn holds(game: &GameState) -> bool {
        match (game.is_game_over(), game.result()) {
            (false, None) => !game.board().is_full(),
            (true, Some(GameResult::Win { winner, info })) => {
                rules::is_line_marked(game.board(), info, winner)
            }
            (true, Some(GameResult::Draw)) => rules::is_draw(game.board()),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Game is over exactly when a line is complete or the board is full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_and_finished_games_hold() {
        let mut game = GameState::new();
        assert!(TerminalStateInvariant::holds(&game));
        for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            game.make_move(row, col).unwrap();
            assert!(TerminalStateInvariant::holds(&game));
        }
        assert!(game.is_game_over());
    }

    #[test]
    fn test_over_without_result_violates() {
        let mut game = GameState::new();
        game.game_over = true;
        assert!(!TerminalStateInvariant::holds(&game));
    }
}
