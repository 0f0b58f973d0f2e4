//! Session controller: one engine, one tally, one command dispatcher.
//!
//! Every stimulus from the outside world is a [`Command`]. The controller
//! handles it to completion and reports what happened as
//! [`SessionEvent`]s. Deferred computer replies carry a [`MoveTicket`]
//! that is honored only while it is still the outstanding ticket of the
//! current game.

use crate::status::status_text;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tictactoe_core::{
    ComputerPlayer, GameEngine, GameMode, GameState, GameStatus, InvalidMove, MoveOutcome, Player,
    ScoreTally,
};
use tracing::{debug, info, instrument, warn};

/// Identifies one scheduled computer reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveTicket {
    generation: u64,
    serial: u64,
}

impl MoveTicket {
    /// The reset generation the ticket was issued under.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A human picked a cell (0-8).
    CellSelected(usize),
    /// The computer's thinking delay for this ticket elapsed.
    ComputerMove(MoveTicket),
    /// Start a new game in the same mode.
    Restart,
    /// Start a new game in another mode.
    SwitchMode(GameMode),
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A mark was placed.
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where.
        index: usize,
        /// What the engine reported.
        outcome: MoveOutcome,
    },
    /// The engine refused the move; nothing changed.
    Rejected(InvalidMove),
    /// The caller should deliver [`Command::ComputerMove`] after the delay.
    ComputerScheduled(MoveTicket),
    /// A computer reply arrived for a game that has moved on.
    StaleComputerMove(MoveTicket),
    /// A new game started; pending computer replies are void.
    GameReset {
        /// Mode of the new game.
        mode: GameMode,
    },
}

/// Everything the UI needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SessionView {
    /// Current game.
    state: GameState,
    /// Scores so far.
    tally: ScoreTally,
    /// Status line.
    status: String,
    /// Last rejection, until the next successful move or reset.
    notice: Option<String>,
    /// True while a computer reply is pending.
    thinking: bool,
}

/// Owns the game lifecycle for a play session.
#[derive(Debug)]
pub struct SessionController<R = StdRng> {
    engine: GameEngine,
    tally: ScoreTally,
    computer: ComputerPlayer<R>,
    generation: u64,
    next_serial: u64,
    pending: Option<MoveTicket>,
    notice: Option<String>,
}

impl SessionController<StdRng> {
    /// Creates a session whose computer is seeded from the OS.
    pub fn new(mode: GameMode) -> Self {
        Self::with_computer(mode, ComputerPlayer::new())
    }

    /// Creates a session with an optional fixed computer seed.
    pub fn with_seed(mode: GameMode, seed: Option<u64>) -> Self {
        let computer = match seed {
            Some(seed) => ComputerPlayer::seeded(seed),
            None => ComputerPlayer::new(),
        };
        Self::with_computer(mode, computer)
    }
}

impl<R: Rng> SessionController<R> {
    /// Creates a session around a given computer player.
    #[instrument(skip(computer))]
    pub fn with_computer(mode: GameMode, computer: ComputerPlayer<R>) -> Self {
        info!(%mode, "Starting session");
        Self {
            engine: GameEngine::new(mode),
            tally: ScoreTally::new(),
            computer,
            generation: 0,
            next_serial: 0,
            pending: None,
            notice: None,
        }
    }

    /// Handles one command to completion.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn dispatch(&mut self, command: Command) -> Vec<SessionEvent> {
        debug!(?command, "Dispatching");
        match command {
            Command::CellSelected(index) => self.human_move(index),
            Command::ComputerMove(ticket) => self.computer_move(ticket),
            Command::Restart => self.reset(self.engine.state().mode()),
            Command::SwitchMode(mode) => self.reset(mode),
        }
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> SessionView {
        SessionView {
            state: self.engine.current_state(),
            tally: self.tally,
            status: status_text(self.engine.state()),
            notice: self.notice.clone(),
            thinking: self.pending.is_some(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Scores so far.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// The outstanding computer ticket, if any.
    pub fn pending(&self) -> Option<MoveTicket> {
        self.pending
    }

    fn human_move(&mut self, index: usize) -> Vec<SessionEvent> {
        let state = self.engine.state();
        let mover = match state.mode().computer_mark() {
            Some(computer) => computer.opponent(),
            None => state.current_player(),
        };

        let mut events = match self.play(mover, index) {
            Ok(event) => vec![event],
            Err(event) => return vec![event],
        };

        if let SessionEvent::MovePlayed {
            outcome: MoveOutcome::Continue { next_player },
            ..
        } = events[0]
        {
            if self.engine.state().mode().computer_mark() == Some(next_player) {
                let ticket = self.issue_ticket();
                events.push(SessionEvent::ComputerScheduled(ticket));
            }
        }
        events
    }

    fn computer_move(&mut self, ticket: MoveTicket) -> Vec<SessionEvent> {
        let state = self.engine.state();
        let computer = state.mode().computer_mark();
        let current = ticket.generation == self.generation
            && self.pending == Some(ticket)
            && state.status() == GameStatus::InProgress
            && computer == Some(state.current_player());

        let Some(me) = computer.filter(|_| current) else {
            debug!(?ticket, pending = ?self.pending, "Ignoring stale computer move");
            return vec![SessionEvent::StaleComputerMove(ticket)];
        };
        self.pending = None;

        let Some(index) = self
            .computer
            .select_move(self.engine.state().board(), me, me.opponent())
        else {
            warn!(?ticket, "Computer found no empty cell");
            return vec![SessionEvent::StaleComputerMove(ticket)];
        };

        match self.play(me, index) {
            Ok(event) | Err(event) => vec![event],
        }
    }

    fn play(&mut self, mover: Player, index: usize) -> Result<SessionEvent, SessionEvent> {
        match self.engine.apply_move_for(mover, index) {
            Ok(outcome) => {
                self.tally.record(&outcome);
                self.notice = None;
                info!(%mover, index, %outcome, "Move played");
                Ok(SessionEvent::MovePlayed {
                    player: mover,
                    index,
                    outcome,
                })
            }
            Err(error) => {
                warn!(%mover, index, %error, "Move rejected");
                self.notice = Some(error.to_string());
                Err(SessionEvent::Rejected(error))
            }
        }
    }

    fn issue_ticket(&mut self) -> MoveTicket {
        let ticket = MoveTicket {
            generation: self.generation,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.pending = Some(ticket);
        debug!(?ticket, "Computer move scheduled");
        ticket
    }

    fn reset(&mut self, mode: GameMode) -> Vec<SessionEvent> {
        self.generation += 1;
        self.pending = None;
        self.notice = None;
        self.engine.reset(mode);
        info!(%mode, generation = self.generation, "New game");
        vec![SessionEvent::GameReset { mode }]
    }
}
