//! Tic-tac-toe session layer and terminal front end.
//!
//! # Architecture
//!
//! - **Core** (`tictactoe_core`): engine, rules, tally, computer player
//! - **Session**: owns one engine and the tally; handles [`Command`]s
//! - **Scheduler**: the computer's thinking delay as a cancellable task
//! - **TUI**: ratatui rendering and key bindings
//!
//! # Example
//!
//! ```
//! use tictactoe::{Command, SessionController, SessionEvent};
//! use tictactoe_core::GameMode;
//!
//! let mut session = SessionController::with_seed(GameMode::VsComputer, Some(1));
//! let events = session.dispatch(Command::CellSelected(4));
//! assert!(matches!(events[1], SessionEvent::ComputerScheduled(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scheduler;
mod session;
mod status;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use scheduler::ComputerScheduler;
pub use session::{Command, MoveTicket, SessionController, SessionEvent, SessionView};
pub use status::status_text;
