//! TOML match scripts.
//!
//! A script is a list of steps fed into a fresh game, optionally followed
//! by expectations about how the game ends:
//!
//! ```toml
//! name = "top row"
//! expect_winner = "X"
//!
//! [[steps]]
//! move = [0, 0]
//!
//! [[steps]]
//! reset = true
//! ```

use crate::error::ScriptError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_state::{GameResult, Player};
use tracing::{debug, info, instrument};

/// One scripted action.
///
/// In TOML a step is a table holding exactly one of `move = [row, col]` or
/// `reset = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStep", into = "RawStep")]
pub enum Step {
    /// Mark `[row, col]` for whoever is to move.
    Move {
        /// Target square as `[row, col]`.
        at: [usize; 2],
    },
    /// Start the game over.
    Reset,
}

/// Wire form of [`Step`], checked before it becomes one.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    at: Option<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reset: Option<bool>,
}

impl TryFrom<RawStep> for Step {
    type Error = String;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        match (raw.at, raw.reset) {
            (Some(at), None) => Ok(Step::Move { at }),
            (None, Some(true)) => Ok(Step::Reset),
            (None, Some(false)) => Err("reset step must be `reset = true`".to_string()),
            (Some(_), Some(_)) => Err("step has both `move` and `reset`".to_string()),
            (None, None) => Err("step needs `move` or `reset`".to_string()),
        }
    }
}

impl From<Step> for RawStep {
    fn from(step: Step) -> Self {
        match step {
            Step::Move { at } => Self {
                at: Some(at),
                reset: None,
            },
            Step::Reset => Self {
                at: None,
                reset: Some(true),
            },
        }
    }
}

/// Expected final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expected {
    /// X wins.
    #[serde(rename = "X")]
    X,
    /// O wins.
    #[serde(rename = "O")]
    O,
    /// Draw.
    #[serde(rename = "draw")]
    Draw,
}

impl Expected {
    /// True if `result` is the expected ending.
    pub fn matches(self, result: Option<GameResult>) -> bool {
        match (self, result) {
            (Expected::Draw, Some(GameResult::Draw)) => true,
            (Expected::X, Some(r)) => r.winner() == Some(Player::X),
            (Expected::O, Some(r)) => r.winner() == Some(Player::O),
            _ => false,
        }
    }
}

/// A match script loaded from TOML.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchScript {
    /// Script name, used in logs.
    #[serde(default = "default_name")]
    name: String,

    /// Steps in order.
    #[serde(default)]
    steps: Vec<Step>,

    /// Expected ending after the last step.
    #[serde(default)]
    expect_winner: Option<Expected>,

    /// Expected turn count after the last step.
    #[serde(default)]
    expect_turns: Option<usize>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl MatchScript {
    /// Creates a script from steps, with no expectations.
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
            expect_winner: None,
            expect_turns: None,
        }
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(name = %script.name, steps = script.steps.len(), "Script parsed");
        Ok(script)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;

        let script = Self::parse(&content)?;
        info!(name = %script.name, "Script loaded successfully");
        Ok(script)
    }

    /// Sets the expected ending.
    pub fn with_expected_winner(mut self, expected: Expected) -> Self {
        self.expect_winner = Some(expected);
        self
    }

    /// Sets the expected turn count.
    pub fn with_expected_turns(mut self, turns: usize) -> Self {
        self.expect_turns = Some(turns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let script = MatchScript::parse(
            r#"
            name = "mixed"
            expect_winner = "draw"
            expect_turns = 1

            [[steps]]
            move = [1, 2]

            [[steps]]
            reset = true
            "#,
        )
        .unwrap();

        assert_eq!(script.name(), "mixed");
        assert_eq!(
            script.steps(),
            &vec![Step::Move { at: [1, 2] }, Step::Reset]
        );
        assert_eq!(script.expect_winner(), &Some(Expected::Draw));
        assert_eq!(script.expect_turns(), &Some(1));
    }

    #[test]
    fn test_defaults() {
        let script = MatchScript::parse("").unwrap();
        assert_eq!(script.name(), "unnamed");
        assert!(script.steps().is_empty());
        assert_eq!(script.expect_winner(), &None);
    }

    #[test]
    fn test_unknown_winner_rejected() {
        let err = MatchScript::parse(r#"expect_winner = "Z""#).unwrap_err();
        assert!(err.message.contains("Failed to parse script"));
    }

    #[test]
    fn test_step_with_move_and_reset_rejected() {
        let err = MatchScript::parse(
            r#"
            [[steps]]
            move = [0, 0]
            reset = true
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("both `move` and `reset`"));
    }

    #[test]
    fn test_reset_false_rejected() {
        let err = MatchScript::parse(
            r#"
            [[steps]]
            reset = false
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("reset = true"));
    }

    #[test]
    fn test_unknown_step_key_rejected() {
        let err = MatchScript::parse(
            r#"
            [[steps]]
            mvoe = [0, 0]
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("Failed to parse script"));
    }

    #[test]
    fn test_expected_matches() {
        let x_win = GameResult::Win {
            winner: Player::X,
            info: tictactoe_state::WinInfo::MainDiagonal,
        };
        assert!(Expected::X.matches(Some(x_win)));
        assert!(!Expected::O.matches(Some(x_win)));
        assert!(Expected::Draw.matches(Some(GameResult::Draw)));
        assert!(!Expected::Draw.matches(None));
    }
}
