//! The game state: board, turn, and lifecycle.

use crate::action::{Move, MoveOutcome};
use crate::contracts::{LegalMove, assert_invariants};
use crate::error::GameError;
use crate::listener::{
    GameEvent, GameListener, ListenerId, Listeners, OnGameEnded, OnGameRestarted, OnMoveMade,
};
use crate::outcome::GameResult;
use crate::rules;
use crate::types::{BOARD_SIZE, Board, Coord, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// State of one tic-tac-toe game.
///
/// Created with an empty board and X to move. [`GameState::reset`] returns
/// it to that state in place; subscribed listeners are kept across resets.
#[derive(Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) turns_passed: usize,
    pub(crate) game_over: bool,
    pub(crate) result: Option<GameResult>,
    pub(crate) history: Vec<Move>,
    listeners: Listeners,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            turns_passed: 0,
            game_over: false,
            result: None,
            history: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// Marks `(row, col)` for the current player.
    ///
    /// Coordinates outside the board are an error. A move onto a marked
    /// square, or any move once the game is over, is ignored: nothing
    /// changes and no listener is called.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turns_passed))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let coord = Coord::new(row, col).inspect_err(|e| warn!(%e, "Rejecting move"))?;
        Ok(self.make_move_at(coord))
    }

    /// Marks an already validated square for the current player.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turns_passed))]
    pub fn make_move_at(&mut self, coord: Coord) -> MoveOutcome {
        if let Err(rejection) = LegalMove::check(self, coord) {
            debug!(%coord, %rejection, "Ignoring illegal move");
            return MoveOutcome::Ignored(rejection);
        }

        let player = self.current_player;
        self.board.set(coord, Square::Occupied(player));
        self.turns_passed += 1;
        self.history.push(Move::new(player, coord));

        let moved = GameEvent::MoveMade {
            row: coord.row(),
            col: coord.col(),
        };

        match self.check_end(coord, player) {
            Some(result) => {
                self.game_over = true;
                self.result = Some(result);
                assert_invariants(self);
                info!(%result, turns = self.turns_passed, "Game ended");

                self.listeners.emit(&moved);
                self.listeners.emit(&GameEvent::GameEnded(result));
                MoveOutcome::Ended(result)
            }
            None => {
                self.current_player = player.opponent();
                assert_invariants(self);
                debug!(%coord, next = %self.current_player, "Move applied");

                self.listeners.emit(&moved);
                MoveOutcome::Continued
            }
        }
    }

    /// Decides whether the move just applied ended the game.
    ///
    /// A win takes precedence over a full board.
    fn check_end(&self, coord: Coord, player: Player) -> Option<GameResult> {
        if let Some(info) = rules::winning_line(&self.board, coord, player) {
            return Some(GameResult::Win {
                winner: player,
                info,
            });
        }
        rules::is_full(&self.board).then_some(GameResult::Draw)
    }

    /// Starts over: empty board, X to move, no turns, not over.
    #[instrument(skip(self), fields(turns = self.turns_passed, over = self.game_over))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.turns_passed = 0;
        self.game_over = false;
        self.result = None;
        self.history.clear();
        assert_invariants(self);
        info!("Game restarted");

        self.listeners.emit(&GameEvent::GameRestarted);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the winner, once a game is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of accepted moves since construction or the last reset.
    pub fn turns_passed(&self) -> usize {
        self.turns_passed
    }

    /// True once a move has won or drawn the game.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The final result, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Squares the current player may mark; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.game_over {
            return Vec::new();
        }
        self.board.empty_coords()
    }

    /// Serializable copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            turns_passed: self.turns_passed,
            game_over: self.game_over,
            result: self.result,
        }
    }

    /// Subscribes a listener to every notification channel.
    pub fn subscribe(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener, handing it back.
    pub fn unsubscribe(&mut self, id: ListenerId) -> Option<Box<dyn GameListener>> {
        self.listeners.unsubscribe(id)
    }

    /// Calls `f(row, col)` after every accepted move.
    pub fn on_move_made<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(usize, usize) + 'static,
    {
        self.listeners.subscribe(Box::new(OnMoveMade(f)))
    }

    /// Calls `f(result)` when a game ends.
    pub fn on_game_ended<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&GameResult) + 'static,
    {
        self.listeners.subscribe(Box::new(OnGameEnded(f)))
    }

    /// Calls `f()` on every reset.
    pub fn on_game_restarted<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.listeners.subscribe(Box::new(OnGameRestarted(f)))
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable state of a game at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move.
    pub current_player: Player,
    /// Accepted moves so far.
    pub turns_passed: usize,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Final result, if ended.
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    /// Checks that the fields agree with each other and with the board.
    ///
    /// Useful for snapshots read back from outside, where nothing
    /// guarantees they came from a real game.
    #[instrument(skip(self))]
    pub fn is_consistent(&self) -> bool {
        let x = self.board.count_of(Player::X);
        let o = self.board.count_of(Player::O);
        if self.turns_passed != x + o || !(x == o || x == o + 1) {
            return false;
        }
        if self.game_over != self.result.is_some() {
            return false;
        }
        match self.result {
            Some(GameResult::Win { winner, info }) => {
                // The winning move was the last one played.
                let winner_moved_last = match winner {
                    Player::X => x == o + 1,
                    Player::O => x == o,
                };
                winner_moved_last
                    && info.number().is_none_or(|n| n < BOARD_SIZE)
                    && rules::is_line_marked(&self.board, info, winner)
                    && self.current_player == winner
            }
            Some(GameResult::Draw) => x == o + 1 && rules::is_draw(&self.board),
            None => {
                let to_move = if x == o { Player::X } else { Player::O };
                rules::winner_on(&self.board).is_none()
                    && !self.board.is_full()
                    && self.current_player == to_move
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Rejection;
    use crate::listener::EventLog;
    use crate::outcome::WinInfo;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.turns_passed(), 0);
        assert!(!game.is_game_over());
        assert_eq!(game.result(), None);
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = GameState::new();
        let log = EventLog::new();
        game.subscribe(Box::new(log.clone()));

        game.make_move(0, 0).unwrap();
        log.clear();
        let before = game.snapshot();

        let outcome = game.make_move(0, 0).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(Rejection::Occupied(Coord::at(0, 0)))
        );
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_player(), Player::O);
        assert!(log.is_empty());
    }

    #[test]
    fn test_win_sets_result_and_keeps_mover() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
            game.make_move(row, col).unwrap();
        }
        let outcome = game.make_move(0, 2).unwrap();

        let expected = GameResult::Win {
            winner: Player::X,
            info: WinInfo::Row(0),
        };
        assert_eq!(outcome, MoveOutcome::Ended(expected));
        assert_eq!(game.result(), Some(expected));
        assert_eq!(game.current_player(), Player::X);
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_snapshot_consistency() {
        let mut game = GameState::new();
        assert!(game.snapshot().is_consistent());
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            game.make_move(row, col).unwrap();
        }
        assert!(game.snapshot().is_consistent());

        let mut forged = game.snapshot();
        forged.game_over = true;
        assert!(!forged.is_consistent());

        let mut forged = game.snapshot();
        forged.turns_passed = 7;
        assert!(!forged.is_consistent());

        let mut forged = game.snapshot();
        forged.game_over = true;
        forged.result = Some(GameResult::Win {
            winner: Player::X,
            info: WinInfo::Row(5),
        });
        assert!(!forged.is_consistent());
    }
}
