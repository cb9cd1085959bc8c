//! Win detection logic for tic-tac-toe.

use crate::outcome::WinInfo;
use crate::types::{Board, Coord, Player, Square};
use tracing::instrument;

/// Every line that wins, in the order a full scan checks them.
pub const ALL_LINES: [WinInfo; 8] = [
    WinInfo::Row(0),
    WinInfo::Row(1),
    WinInfo::Row(2),
    WinInfo::Column(0),
    WinInfo::Column(1),
    WinInfo::Column(2),
    WinInfo::MainDiagonal,
    WinInfo::AntiDiagonal,
];

/// Checks whether all three squares of a line hold `player`'s mark.
pub fn is_line_marked(board: &Board, line: WinInfo, player: Player) -> bool {
    line.coords()
        .iter()
        .all(|coord| board.get(*coord) == Square::Occupied(player))
}

/// Finds the line completed by `player` through the square just played.
///
/// Only the lines through `coord` can have changed, so at most four are
/// checked: its row, its column, and each diagonal it lies on. Row wins are
/// reported before column wins, column before diagonals.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board, coord: Coord, player: Player) -> Option<WinInfo> {
    let candidates = [
        Some(WinInfo::Row(coord.row())),
        Some(WinInfo::Column(coord.col())),
        coord.is_on_main_diagonal().then_some(WinInfo::MainDiagonal),
        coord.is_on_anti_diagonal().then_some(WinInfo::AntiDiagonal),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|line| is_line_marked(board, *line, player))
}

/// Scans the whole board for a completed line.
///
/// Returns the first completed line in [`ALL_LINES`] order.
#[instrument(level = "trace", skip(board))]
pub fn winner_on(board: &Board) -> Option<(Player, WinInfo)> {
    ALL_LINES.into_iter().find_map(|line| {
        let [first, ..] = line.coords();
        let player = board.get(first).player()?;
        is_line_marked(board, line, player).then_some((player, line))
    })
}
