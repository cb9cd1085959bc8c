//! Change notifications for the game state.
//!
//! Listeners are told about every accepted move, every finished game and
//! every restart. They are called synchronously, in the order they were
//! subscribed, and each one sees each event exactly once.

use crate::outcome::GameResult;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{instrument, trace};

/// Receives notifications from a [`GameState`](crate::GameState).
///
/// Every method has an empty default, so a listener only implements the
/// channels it cares about.
pub trait GameListener {
    /// A move was accepted at `(row, col)`.
    ///
    /// Fires for every accepted move, including the one that ends the game.
    fn on_move_made(&mut self, _row: usize, _col: usize) {}

    /// The game ended. Always preceded by the `on_move_made` for the final move.
    fn on_game_ended(&mut self, _result: &GameResult) {}

    /// The game was reset to its initial state.
    fn on_game_restarted(&mut self) {}
}

/// One notification, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was accepted.
    MoveMade {
        /// Row of the marked square.
        row: usize,
        /// Column of the marked square.
        col: usize,
    },
    /// The game ended with this result.
    GameEnded(GameResult),
    /// The game was reset.
    GameRestarted,
}

impl GameEvent {
    /// Hands this event to the matching listener method.
    pub fn deliver(&self, listener: &mut dyn GameListener) {
        match self {
            GameEvent::MoveMade { row, col } => listener.on_move_made(*row, *col),
            GameEvent::GameEnded(result) => listener.on_game_ended(result),
            GameEvent::GameRestarted => listener.on_game_restarted(),
        }
    }
}

/// Handle returned by subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered set of subscribed listeners.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn GameListener>)>,
}

impl Listeners {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener after all existing ones.
    #[instrument(skip(self, listener))]
    pub fn subscribe(&mut self, listener: Box<dyn GameListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        trace!(?id, count = self.entries.len(), "Listener subscribed");
        id
    }

    /// Removes a listener, handing it back. Unknown ids return `None`.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: ListenerId) -> Option<Box<dyn GameListener>> {
        let index = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        let (_, listener) = self.entries.remove(index);
        trace!(count = self.entries.len(), "Listener unsubscribed");
        Some(listener)
    }

    /// Number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers an event to every listener in subscription order.
    pub fn emit(&mut self, event: &GameEvent) {
        trace!(?event, listeners = self.entries.len(), "Emitting event");
        for (_, listener) in &mut self.entries {
            event.deliver(listener.as_mut());
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Adapter turning a move-made closure into a listener.
pub(crate) struct OnMoveMade<F>(pub(crate) F);

impl<F: FnMut(usize, usize)> GameListener for OnMoveMade<F> {
    fn on_move_made(&mut self, row: usize, col: usize) {
        (self.0)(row, col)
    }
}

/// Adapter turning a game-ended closure into a listener.
pub(crate) struct OnGameEnded<F>(pub(crate) F);

impl<F: FnMut(&GameResult)> GameListener for OnGameEnded<F> {
    fn on_game_ended(&mut self, result: &GameResult) {
        (self.0)(result)
    }
}

/// Adapter turning a restart closure into a listener.
pub(crate) struct OnGameRestarted<F>(pub(crate) F);

impl<F: FnMut()> GameListener for OnGameRestarted<F> {
    fn on_game_restarted(&mut self) {
        (self.0)()
    }
}

/// Listener that records every event it receives.
///
/// Clones share the same log, so keep one clone and subscribe the other.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far, oldest first.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl GameListener for EventLog {
    fn on_move_made(&mut self, row: usize, col: usize) {
        self.record(GameEvent::MoveMade { row, col });
    }

    fn on_game_ended(&mut self, result: &GameResult) {
        self.record(GameEvent::GameEnded(*result));
    }

    fn on_game_restarted(&mut self) {
        self.record(GameEvent::GameRestarted);
    }
}
