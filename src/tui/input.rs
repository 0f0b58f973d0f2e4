//! Key bindings for the terminal UI.

use crate::session::Command;
use crossterm::event::KeyCode;
use tictactoe_core::GameMode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Hand a command to the session.
    Dispatch(Command),
    /// Move the cursor to this cell.
    MoveCursor(usize),
    /// Leave the program.
    Quit,
    /// Unbound key.
    Ignore,
}

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    match key {
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        _ => cursor,
    }
}

/// Maps a key to an action, given the current cursor cell.
pub fn map_key(key: KeyCode, cursor: usize) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::MoveCursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Dispatch(Command::CellSelected(cursor)),
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(digit) => KeyAction::Dispatch(Command::CellSelected(digit as usize - 1)),
            None => KeyAction::Ignore,
        },
        KeyCode::Char('r') => KeyAction::Dispatch(Command::Restart),
        KeyCode::Char('p') => KeyAction::Dispatch(Command::SwitchMode(GameMode::TwoPlayer)),
        KeyCode::Char('c') => KeyAction::Dispatch(Command::SwitchMode(GameMode::VsComputer)),
        _ => KeyAction::Ignore,
    }
}
