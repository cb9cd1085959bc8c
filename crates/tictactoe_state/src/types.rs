//! Core domain types for tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
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
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// A validated board coordinate.
///
/// Both `row` and `col` are always in `0..BOARD_SIZE`; the only way to build
/// one from caller input is [`Coord::new`], which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unvalidated wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = GameError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// Creates a coordinate, rejecting rows or columns outside `0..=2`.
    #[instrument(level = "trace")]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(Self { row, col })
    }

    /// Builds a coordinate known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARE_COUNT).then(|| Self::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Row-major index of this coordinate (0-8).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// True if this square lies on the top-left to bottom-right diagonal.
    pub fn is_on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True if this square lies on the top-right to bottom-left diagonal.
    pub fn is_on_anti_diagonal(self) -> bool {
        self.row + self.col == BOARD_SIZE - 1
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SQUARE_COUNT).map(|index| Self::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARE_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; SQUARE_COUNT],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; SQUARE_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.index()]
    }

    /// Gets the square at an unchecked `(row, col)` pair.
    pub fn get_checked(&self, row: usize, col: usize) -> Result<Square, GameError> {
        Coord::new(row, col).map(|coord| self.get(coord))
    }

    /// Sets the square at the given coordinate.
    pub(crate) fn set(&mut self, coord: Coord, square: Square) {
        self.squares[coord.index()] = square;
    }

    /// Empties every square in place.
    pub(crate) fn clear(&mut self) {
        self.squares = [Square::Empty; SQUARE_COUNT];
    }

    /// Checks if the square at a coordinate is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SQUARE_COUNT] {
        &self.squares
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Square> {
        self.squares.chunks_exact(BOARD_SIZE)
    }

    /// Number of occupied squares.
    pub fn filled_count(&self) -> usize {
        self.squares.iter().filter(|square| !square.is_empty()).count()
    }

    /// Number of squares occupied by a given player.
    pub fn count_of(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.filled_count() == SQUARE_COUNT
    }

    /// Coordinates of the empty squares in row-major order.
    pub fn empty_coords(&self) -> Vec<Coord> {
        Coord::all().filter(|coord| self.is_empty(*coord)).collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so a reader can name them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, squares) in self.rows().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => (row * BOARD_SIZE + col + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
