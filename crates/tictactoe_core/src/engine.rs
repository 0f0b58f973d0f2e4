//! Tic-tac-toe game engine.
//!
//! [`GameEngine`] exclusively owns the [`GameState`]. The only way to change
//! it is [`GameEngine::apply_move`] (or its turn-checked form) and
//! [`GameEngine::reset`].

use crate::action::{InvalidMove, MoveOutcome};
use crate::rules::{check_winner, is_full};
use crate::{GameMode, GameState, GameStatus, Player, CELL_COUNT};
use tracing::{debug, info, instrument, warn};

#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};

/// Game engine holding a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine with a fresh game in `mode`.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
        }
    }

    /// Clears the board and starts a new game in `mode`, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) -> GameState {
        info!(%mode, "Resetting game");
        self.state = GameState::new(mode);
        self.state.clone()
    }

    /// Returns a snapshot of the current state.
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrows the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Checks run in order: game over, index range, occupancy. On error the
    /// state is untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, InvalidMove> {
        self.validate(index)?;

        let player = self.state.current_player();
        self.state.board_mut().place(index, player);
        debug!(index, %player, "Mark placed");

        let outcome = if let Some((winner, line)) = check_winner(self.state.board()) {
            self.state.finish(GameStatus::Won(winner), Some(line));
            info!(%winner, ?line, "Game won");
            MoveOutcome::Won {
                player: winner,
                line,
            }
        } else if is_full(self.state.board()) {
            self.state.finish(GameStatus::Draw, None);
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            let next_player = player.opponent();
            self.state.set_current_player(next_player);
            MoveOutcome::Continue { next_player }
        };

        #[cfg(debug_assertions)]
        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "Game invariants violated after move"
        );

        Ok(outcome)
    }

    /// Like [`apply_move`](Self::apply_move), but rejects `mover` when it is
    /// not their turn.
    #[instrument(skip(self))]
    pub fn apply_move_for(
        &mut self,
        mover: Player,
        index: usize,
    ) -> Result<MoveOutcome, InvalidMove> {
        if self.state.status() == GameStatus::InProgress && mover != self.state.current_player() {
            warn!(%mover, expected = %self.state.current_player(), "Move out of turn");
            return Err(InvalidMove::NotYourTurn(mover));
        }
        self.apply_move(index)
    }

    fn validate(&self, index: usize) -> Result<(), InvalidMove> {
        let error = if self.state.status().is_terminal() {
            InvalidMove::GameOver
        } else if index >= CELL_COUNT {
            InvalidMove::OutOfRange(index)
        } else if !self.state.board().is_empty(index) {
            InvalidMove::Occupied(index)
        } else {
            return Ok(());
        };
        warn!(index, error = %error, "Invalid move");
        Err(error)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
