//! Tests for listener registration and notification order.

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_state::{EventLog, GameEvent, GameListener, GameResult, GameState, Player};

/// Listener that writes a tagged line per event into a shared journal.
struct Journal {
    tag: &'static str,
    lines: Rc<RefCell<Vec<String>>>,
}

impl GameListener for Journal {
    fn on_move_made(&mut self, row: usize, col: usize) {
        self.lines
            .borrow_mut()
            .push(format!("{}: move {} {}", self.tag, row, col));
    }

    fn on_game_ended(&mut self, result: &GameResult) {
        self.lines
            .borrow_mut()
            .push(format!("{}: ended {}", self.tag, result));
    }

    fn on_game_restarted(&mut self) {
        self.lines.borrow_mut().push(format!("{}: restarted", self.tag));
    }
}

#[test]
fn test_every_listener_sees_every_event_in_order() {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let mut game = GameState::new();
    for tag in ["a", "b"] {
        game.subscribe(Box::new(Journal {
            tag,
            lines: Rc::clone(&lines),
        }));
    }

    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.make_move(row, col).unwrap();
    }
    game.reset();

    let lines = lines.borrow();
    assert_eq!(lines.len(), 14);
    assert_eq!(lines[8], "a: move 0 2");
    assert_eq!(lines[9], "b: move 0 2");
    assert_eq!(lines[10], "a: ended Player X wins (row 0)");
    assert_eq!(lines[11], "b: ended Player X wins (row 0)");
    assert_eq!(lines[12], "a: restarted");
    assert_eq!(lines[13], "b: restarted");
}

#[test]
fn test_unsubscribed_listener_hears_nothing_more() {
    let mut game = GameState::new();
    let kept = EventLog::new();
    let dropped = EventLog::new();
    game.subscribe(Box::new(kept.clone()));
    let id = game.subscribe(Box::new(dropped.clone()));

    game.make_move(1, 1).unwrap();
    assert!(game.unsubscribe(id).is_some());
    game.make_move(0, 0).unwrap();
    game.reset();

    assert_eq!(dropped.events(), vec![GameEvent::MoveMade { row: 1, col: 1 }]);
    assert_eq!(kept.len(), 3);
    assert_eq!(game.listener_count(), 1);
}

#[test]
fn test_closure_channels() {
    let mut game = GameState::new();
    let moves = Rc::new(RefCell::new(Vec::new()));
    let winners = Rc::new(RefCell::new(Vec::new()));
    let restarts = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&moves);
    game.on_move_made(move |row, col| sink.borrow_mut().push((row, col)));
    let sink = Rc::clone(&winners);
    game.on_game_ended(move |result| sink.borrow_mut().push(result.winner()));
    let sink = Rc::clone(&restarts);
    let restart_id = game.on_game_restarted(move || *sink.borrow_mut() += 1);

    for (row, col) in [(0, 1), (0, 0), (1, 1), (1, 0), (2, 2), (2, 0)] {
        game.make_move(row, col).unwrap();
    }
    game.reset();
    game.unsubscribe(restart_id);
    game.reset();

    assert_eq!(moves.borrow().len(), 6);
    assert_eq!(*winners.borrow(), vec![Some(Player::O)]);
    assert_eq!(*restarts.borrow(), 1);
}

#[test]
fn test_listeners_survive_reset() {
    let mut game = GameState::new();
    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));

    game.reset();
    game.make_move(2, 2).unwrap();

    assert_eq!(
        log.events(),
        vec![
            GameEvent::GameRestarted,
            GameEvent::MoveMade { row: 2, col: 2 },
        ]
    );
}

#[test]
fn test_rejected_moves_publish_nothing() {
    let mut game = GameState::new();
    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));

    game.make_move(1, 1).unwrap();
    game.make_move(1, 1).unwrap();
    let _ = game.make_move(5, 5);

    assert_eq!(log.len(), 1);
}
