//! Session controller flows through the public API.

use tictactoe::{Command, MoveTicket, SessionController, SessionEvent};
use tictactoe_core::{GameMode, GameStatus, InvalidMove, MoveOutcome, Player};

fn ticket_in(events: &[SessionEvent]) -> Option<MoveTicket> {
    events.iter().find_map(|e| match e {
        SessionEvent::ComputerScheduled(t) => Some(*t),
        _ => None,
    })
}

#[test]
fn test_draw_increments_draws_once() {
    let mut session = SessionController::with_seed(GameMode::TwoPlayer, None);
    let mut last = Vec::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        last = session.dispatch(Command::CellSelected(index));
    }
    assert!(matches!(
        last[0],
        SessionEvent::MovePlayed {
            outcome: MoveOutcome::Draw,
            ..
        }
    ));
    assert_eq!(session.tally().draws(), 1);

    // Rejected moves on a finished game do not count again.
    assert_eq!(
        session.dispatch(Command::CellSelected(0)),
        vec![SessionEvent::Rejected(InvalidMove::GameOver)]
    );
    assert_eq!(session.tally().games_played(), 1);
}

#[test]
fn test_tally_survives_restart() {
    let mut session = SessionController::with_seed(GameMode::TwoPlayer, None);
    for round in 1..=2 {
        for index in [0, 3, 1, 4, 2] {
            session.dispatch(Command::CellSelected(index));
        }
        assert_eq!(session.state().status(), GameStatus::Won(Player::X));
        assert_eq!(session.tally().wins_for(Player::X), round);
        session.dispatch(Command::Restart);
    }
    assert_eq!(session.state().board().empty_cells().len(), 9);
    assert_eq!(session.state().mode(), GameMode::TwoPlayer);
}

#[test]
fn test_restart_voids_pending_computer_move() {
    let mut session = SessionController::with_seed(GameMode::VsComputer, Some(9));
    let ticket = ticket_in(&session.dispatch(Command::CellSelected(4))).expect("scheduled");

    assert_eq!(
        session.dispatch(Command::Restart),
        vec![SessionEvent::GameReset {
            mode: GameMode::VsComputer
        }]
    );
    assert_eq!(session.pending(), None);

    let events = session.dispatch(Command::ComputerMove(ticket));
    assert_eq!(events, vec![SessionEvent::StaleComputerMove(ticket)]);
    assert_eq!(session.state().board().empty_cells().len(), 9);
    assert_eq!(session.state().current_player(), Player::X);
}

#[test]
fn test_old_ticket_ignored_after_new_one_issued() {
    let mut session = SessionController::with_seed(GameMode::VsComputer, Some(9));
    let old = ticket_in(&session.dispatch(Command::CellSelected(4))).expect("scheduled");
    session.dispatch(Command::Restart);
    let new = ticket_in(&session.dispatch(Command::CellSelected(0))).expect("scheduled");
    assert_ne!(old, new);

    assert_eq!(
        session.dispatch(Command::ComputerMove(old)),
        vec![SessionEvent::StaleComputerMove(old)]
    );
    assert_eq!(session.pending(), Some(new));
    assert!(matches!(
        session.dispatch(Command::ComputerMove(new))[0],
        SessionEvent::MovePlayed {
            player: Player::O,
            ..
        }
    ));
}

#[test]
fn test_switch_mode_voids_pending_computer_move() {
    let mut session = SessionController::with_seed(GameMode::VsComputer, Some(9));
    let ticket = ticket_in(&session.dispatch(Command::CellSelected(4))).expect("scheduled");

    session.dispatch(Command::SwitchMode(GameMode::TwoPlayer));
    assert_eq!(
        session.dispatch(Command::ComputerMove(ticket)),
        vec![SessionEvent::StaleComputerMove(ticket)]
    );

    // In two-player mode the second human plays O.
    session.dispatch(Command::CellSelected(4));
    let events = session.dispatch(Command::CellSelected(0));
    assert!(matches!(
        events[0],
        SessionEvent::MovePlayed {
            player: Player::O,
            ..
        }
    ));
    assert_eq!(ticket_in(&events), None);
}

#[test]
fn test_computer_blocks_human_threat() {
    let mut session = SessionController::with_seed(GameMode::VsComputer, Some(4));
    let ticket = ticket_in(&session.dispatch(Command::CellSelected(0))).expect("scheduled");
    session.dispatch(Command::ComputerMove(ticket));

    // Find a second human cell that threatens the top row or the left column.
    let threat = if session.state().board().is_empty(1) && session.state().board().is_empty(2) {
        (1, 2)
    } else {
        (3, 6)
    };
    let ticket = ticket_in(&session.dispatch(Command::CellSelected(threat.0))).expect("scheduled");
    let events = session.dispatch(Command::ComputerMove(ticket));
    assert!(matches!(
        events[0],
        SessionEvent::MovePlayed {
            player: Player::O,
            index,
            ..
        } if index == threat.1
    ));
}

#[test]
fn test_full_game_against_computer_terminates() {
    let mut session = SessionController::with_seed(GameMode::VsComputer, Some(21));
    while session.state().status() == GameStatus::InProgress {
        let index = session.state().board().empty_cells()[0];
        let events = session.dispatch(Command::CellSelected(index));
        if let Some(ticket) = ticket_in(&events) {
            let reply = session.dispatch(Command::ComputerMove(ticket));
            assert!(matches!(reply[0], SessionEvent::MovePlayed { .. }));
        }
    }

    assert_eq!(session.tally().games_played(), 1);
    assert_eq!(session.pending(), None);
    let view = session.snapshot();
    assert!(!view.thinking());
    assert!(
        ["Player X wins!", "Computer wins!", "It's a draw!"].contains(&view.status().as_str()),
        "unexpected status {}",
        view.status()
    );
}

#[test]
fn test_snapshot_serializes() {
    let mut session = SessionController::with_seed(GameMode::VsComputer, Some(1));
    session.dispatch(Command::CellSelected(4));
    let json = serde_json::to_value(session.snapshot()).expect("serializable");
    assert_eq!(json["status"], "Computer thinking...");
    assert_eq!(json["thinking"], true);
    assert_eq!(json["tally"]["draws"], 0);
}
