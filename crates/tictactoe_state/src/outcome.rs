//! How a finished game ended.

use crate::types::{BOARD_SIZE, Coord, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of line that completed a win.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum WinKind {
    /// A full row.
    Row,
    /// A full column.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// The line that won the game.
///
/// Rows and columns carry their index; diagonals have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinInfo {
    /// Row `0..=2`.
    Row(usize),
    /// Column `0..=2`.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinInfo {
    /// The tag of this line, without its index.
    pub fn kind(self) -> WinKind {
        match self {
            WinInfo::Row(_) => WinKind::Row,
            WinInfo::Column(_) => WinKind::Column,
            WinInfo::MainDiagonal => WinKind::MainDiagonal,
            WinInfo::AntiDiagonal => WinKind::AntiDiagonal,
        }
    }

    /// Row or column index, `None` for diagonals.
    pub fn number(self) -> Option<usize> {
        match self {
            WinInfo::Row(n) | WinInfo::Column(n) => Some(n),
            WinInfo::MainDiagonal | WinInfo::AntiDiagonal => None,
        }
    }

    /// The three squares making up this line.
    pub fn coords(self) -> [Coord; BOARD_SIZE] {
        match self {
            WinInfo::Row(r) => [Coord::at(r, 0), Coord::at(r, 1), Coord::at(r, 2)],
            WinInfo::Column(c) => [Coord::at(0, c), Coord::at(1, c), Coord::at(2, c)],
            WinInfo::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            WinInfo::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }
}

impl fmt::Display for WinInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinInfo::Row(n) => write!(f, "row {}", n),
            WinInfo::Column(n) => write!(f, "column {}", n),
            WinInfo::MainDiagonal => write!(f, "main diagonal"),
            WinInfo::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Win {
        /// The player who completed the line.
        winner: Player,
        /// Which line was completed.
        info: WinInfo,
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            GameResult::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn win_info(&self) -> Option<WinInfo> {
        match self {
            GameResult::Win { info, .. } => Some(*info),
            GameResult::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner, info } => write!(f, "Player {} wins ({})", winner, info),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
