//! Pure tic-tac-toe game logic.
//!
//! - [`GameEngine`]: owns one game, validates and applies moves, and reports
//!   each move as a [`MoveOutcome`].
//! - [`ComputerPlayer`]: win-now, block, else random.
//! - [`ScoreTally`]: win/draw counters fed from terminal outcomes.
//! - [`invariants`]: properties every reachable state satisfies.
//!
//! ```
//! use tictactoe_core::{GameEngine, GameMode, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new(GameMode::TwoPlayer);
//! for index in [0, 1, 3, 4] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(
//!     engine.apply_move(6),
//!     Ok(MoveOutcome::Won { player: Player::X, line: [0, 3, 6] })
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod computer;
mod engine;
pub mod invariants;
pub mod rules;
mod tally;
mod types;

pub use action::{InvalidMove, MoveOutcome};
pub use computer::{completing_cell, ComputerPlayer};
pub use engine::GameEngine;
pub use rules::{WinLine, WIN_PATTERNS};
pub use tally::ScoreTally;
pub use types::{Board, Cell, GameMode, GameState, GameStatus, Player, CELL_COUNT};
