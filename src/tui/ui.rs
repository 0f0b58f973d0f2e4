//! Stateless rendering of a [`SessionView`].

use crate::session::SessionView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_core::{Cell, GameStatus, Player};

const HELP: &str = "arrows/1-9 move · enter select · r restart · p two-player · c vs computer · q quit";

/// Renders one frame.
pub fn draw(frame: &mut Frame, view: &SessionView, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and scores
            Constraint::Length(4), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Tic-Tac-Toe · {}", view.state().mode().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(24)])
        .split(chunks[1]);
    draw_board(frame, middle[0], view, cursor);
    draw_scores(frame, middle[1], view);

    let mut lines = vec![Line::from(Span::styled(
        view.status().as_str(),
        Style::default().fg(Color::Yellow),
    ))];
    if let Some(notice) = view.notice() {
        lines.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &SessionView, cursor: usize) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &SessionView, cursor: usize, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], view, cursor, row * 3 + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &SessionView, cursor: usize, index: usize) {
    let state = view.state();
    let key = (index + 1).to_string();

    let (symbol, base_style) = match state.board().get(index) {
        Some(Cell::Occupied(Player::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Player::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (key, Style::default().fg(Color::DarkGray)),
    };

    let winning = state
        .winning_line()
        .is_some_and(|line| line.contains(&index));
    let style = if winning {
        base_style.bg(Color::Green)
    } else if index == cursor && state.status() == GameStatus::InProgress {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, view: &SessionView) {
    let tally = view.tally();
    let o_label = match view.state().mode().computer_mark() {
        Some(Player::O) => "Computer",
        _ => "O wins",
    };
    let lines = vec![
        Line::from(format!("X wins    {}", tally.wins_for(Player::X))),
        Line::from(format!("{:<9} {}", o_label, tally.wins_for(Player::O))),
        Line::from(format!("Draws     {}", tally.draws())),
    ];
    let scores = Paragraph::new(lines).block(Block::default().title("Scores").borders(Borders::ALL));
    frame.render_widget(scores, center_rect(area, 24, 5));
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Command, SessionController};
    use ratatui::{backend::TestBackend, Terminal};
    use tictactoe_core::GameMode;

    fn render(view: &SessionView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("test terminal");
        terminal
            .draw(|f| draw(f, view, 4))
            .expect("draw succeeds");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_status_and_scores() {
        let mut session = SessionController::with_seed(GameMode::TwoPlayer, Some(0));
        session.dispatch(Command::CellSelected(0));
        let text = render(&session.snapshot());
        assert!(text.contains("Player O's turn"));
        assert!(text.contains("Scores"));
        assert!(text.contains("Two Player"));
    }

    #[test]
    fn test_renders_rejection_notice() {
        let mut session = SessionController::with_seed(GameMode::TwoPlayer, Some(0));
        session.dispatch(Command::CellSelected(0));
        session.dispatch(Command::CellSelected(0));
        let text = render(&session.snapshot());
        assert!(text.contains("Cell 0 is already occupied"));
    }
}
