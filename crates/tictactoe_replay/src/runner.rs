//! Plays a match script through a fresh game.

use crate::error::ScriptError;
use crate::script::{MatchScript, Step};
use serde::Serialize;
use tictactoe_state::{EventLog, GameEvent, GameSnapshot, GameState, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// What happened while replaying a script.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Script name.
    pub name: String,
    /// Every notification the game published, in order.
    pub events: Vec<GameEvent>,
    /// Number of moves the game ignored.
    pub ignored: usize,
    /// Final observable state.
    pub snapshot: GameSnapshot,
}

/// Replays `script` against a new game and checks its expectations.
///
/// Ignored moves are counted, not errors. A move outside the board, or a
/// final state that does not match the script's expectations, is.
#[instrument(skip(script), fields(name = %script.name(), steps = script.steps().len()))]
pub fn replay(script: &MatchScript) -> Result<ReplayReport, ScriptError> {
    let mut game = GameState::new();
    let log = EventLog::new();
    game.subscribe(Box::new(log.clone()));

    let mut ignored = 0;
    for (index, step) in script.steps().iter().enumerate() {
        match *step {
            Step::Move { at: [row, col] } => {
                let outcome = game.make_move(row, col).map_err(|e| {
                    ScriptError::new(format!("Step {}: {}", index + 1, e))
                })?;
                match outcome {
                    MoveOutcome::Ignored(rejection) => {
                        warn!(step = index + 1, %rejection, "Move ignored");
                        ignored += 1;
                    }
                    MoveOutcome::Ended(result) => {
                        info!(step = index + 1, %result, "Game over");
                    }
                    MoveOutcome::Continued => {
                        debug!(step = index + 1, row, col, "Move played");
                    }
                }
            }
            Step::Reset => game.reset(),
        }
    }

    if let Some(expected) = script.expect_winner()
        && !expected.matches(game.result())
    {
        return Err(ScriptError::new(format!(
            "Expected {:?}, game ended with {:?}",
            expected,
            game.result()
        )));
    }

    if let Some(turns) = script.expect_turns()
        && *turns != game.turns_passed()
    {
        return Err(ScriptError::new(format!(
            "Expected {} turns, game has {}",
            turns,
            game.turns_passed()
        )));
    }

    Ok(ReplayReport {
        name: script.name().clone(),
        events: log.events(),
        ignored,
        snapshot: game.snapshot(),
    })
}
