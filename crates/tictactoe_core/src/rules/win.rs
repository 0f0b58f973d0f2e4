//! Win detection logic for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// Three cell indices forming a line.
pub type WinLine = [usize; 3];

/// Every line on the board: rows, then columns, then diagonals.
///
/// The computer player scans in this order, so it doubles as its tie-break.
pub const WIN_PATTERNS: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player and the first completed line in
/// [`WIN_PATTERNS`] order, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WIN_PATTERNS.iter().find_map(|&line| {
        let [a, b, c] = line;
        let first = board.get(a)?;
        let player = first.player()?;
        (board.get(b) == Some(first) && board.get(c) == Some(first)).then_some((player, line))
    })
}
