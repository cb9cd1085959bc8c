//! Error types for the game state.

use derive_more::{Display, Error};

/// Error returned by game operations.
///
/// Illegal moves inside the board (occupied square, finished game) are not
/// errors; they are ignored. Only input that does not name a square at all
/// is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum GameError {
    /// Row or column is outside `0..=2`.
    #[display("Invalid coordinate ({row}, {col}): rows and columns must be in 0..=2")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
