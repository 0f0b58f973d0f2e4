//! Cumulative session scores.

use crate::{MoveOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counters across the games of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a terminal outcome. `Continue` is ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Won {
                player: Player::X, ..
            } => self.x_wins += 1,
            MoveOutcome::Won {
                player: Player::O, ..
            } => self.o_wins += 1,
            MoveOutcome::Draw => self.draws += 1,
            MoveOutcome::Continue { .. } => return,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Tally updated");
    }

    /// Games won by `player`.
    pub fn wins_for(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished games.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
