//! Terminal front end.
//!
//! A single loop turns key presses and scheduled computer replies into
//! [`Command`]s and hands them to the [`SessionController`] one at a
//! time.

mod input;
mod ui;

pub use input::{map_key, move_cursor, KeyAction};

use crate::config::AppConfig;
use crate::scheduler::ComputerScheduler;
use crate::session::{Command, SessionController};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
pub async fn run(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

#[instrument(skip_all)]
async fn event_loop(terminal: &mut Tui, config: &AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Command>();
    let mut session = SessionController::with_seed(*config.mode(), *config.seed());
    let mut scheduler = ComputerScheduler::new(config.computer_delay(), tx);
    let mut cursor = 4;

    loop {
        let view = session.snapshot();
        terminal.draw(|f| ui::draw(f, &view, cursor))?;

        while let Ok(command) = rx.try_recv() {
            let events = session.dispatch(command);
            scheduler.observe(&events);
        }

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key.code, cursor) {
            KeyAction::Quit => {
                info!("User quit");
                return Ok(());
            }
            KeyAction::MoveCursor(next) => cursor = next,
            KeyAction::Dispatch(command) => {
                if let Command::CellSelected(index) = command {
                    cursor = index;
                }
                let events = session.dispatch(command);
                scheduler.observe(&events);
            }
            KeyAction::Ignore => debug!(code = ?key.code, "Unbound key"),
        }
    }
}
