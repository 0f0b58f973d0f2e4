//! Heuristic computer opponent.
//!
//! The computer plays a fixed-priority strategy: complete its own line if it
//! can, block the opponent's line if it must, otherwise pick a random empty
//! cell. It is deliberately beatable.

use crate::rules::WIN_PATTERNS;
use crate::{Board, Cell, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Returns the empty cell that would complete a line for `player`.
///
/// Scans [`WIN_PATTERNS`] in declaration order and returns the empty cell of
/// the first line holding exactly two of `player`'s marks.
#[instrument(skip(board))]
pub fn completing_cell(board: &Board, player: Player) -> Option<usize> {
    WIN_PATTERNS.iter().find_map(|line| {
        let mut owned = 0;
        let mut empty = None;
        for &index in line {
            match board.get(index) {
                Some(Cell::Occupied(p)) if p == player => owned += 1,
                Some(Cell::Empty) => empty = Some(index),
                _ => {}
            }
        }
        if owned == 2 { empty } else { None }
    })
}

/// Computer player with an injected randomness source.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R = StdRng> {
    rng: R,
}

impl ComputerPlayer<StdRng> {
    /// Creates a computer player seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a computer player with reproducible random choices.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ComputerPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a cell for `me`: win now, else block `opponent`, else random.
    ///
    /// Returns `None` only when the board is full.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board, me: Player, opponent: Player) -> Option<usize> {
        if let Some(index) = completing_cell(board, me) {
            debug!(index, "Winning move");
            return Some(index);
        }

        if let Some(index) = completing_cell(board, opponent) {
            debug!(index, "Blocking move");
            return Some(index);
        }

        let empty = board.empty_cells();
        if empty.is_empty() {
            debug!("No empty cells");
            return None;
        }
        let index = empty[self.rng.random_range(0..empty.len())];
        debug!(index, choices = empty.len(), "Random move");
        Some(index)
    }
}
