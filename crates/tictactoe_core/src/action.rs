//! Move outcomes and move errors.
//!
//! Every successful move yields a [`MoveOutcome`]. It is the only thing the
//! surrounding layer needs to render marks, highlight a line and update the
//! tally.

use crate::rules::WinLine;
use crate::Player;
use serde::{Deserialize, Serialize};

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues with the given player to move.
    Continue {
        /// The player whose turn it now is.
        next_player: Player,
    },
    /// The mover completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// Indices of the completed line, for highlighting.
        line: WinLine,
    },
    /// The board filled up with no line.
    Draw,
}

impl MoveOutcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Continue { next_player } => write!(f, "{} to move", next_player),
            MoveOutcome::Won { player, line } => {
                write!(f, "{} wins on {:?}", player, line)
            }
            MoveOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A move the engine refused. Nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvalidMove {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell is taken.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The mover is not the player to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for InvalidMove {}
