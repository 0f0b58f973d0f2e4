//! Status line text for a game state.

use tictactoe_core::{GameMode, GameState, GameStatus, Player};

/// Human-readable status for the current state and mode.
pub fn status_text(state: &GameState) -> String {
    match (state.status(), state.mode()) {
        (GameStatus::InProgress, GameMode::VsComputer) => match state.current_player() {
            Player::X => "Your turn (X)".to_string(),
            Player::O => "Computer thinking...".to_string(),
        },
        (GameStatus::InProgress, GameMode::TwoPlayer) => {
            format!("Player {}'s turn", state.current_player())
        }
        (GameStatus::Won(Player::O), GameMode::VsComputer) => "Computer wins!".to_string(),
        (GameStatus::Won(player), _) => format!("Player {} wins!", player),
        (GameStatus::Draw, _) => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::GameEngine;

    #[test]
    fn test_two_player_turns() {
        let mut engine = GameEngine::new(GameMode::TwoPlayer);
        assert_eq!(status_text(engine.state()), "Player X's turn");
        engine.apply_move(0).expect("legal move");
        assert_eq!(status_text(engine.state()), "Player O's turn");
    }

    #[test]
    fn test_vs_computer_turns() {
        let mut engine = GameEngine::new(GameMode::VsComputer);
        assert_eq!(status_text(engine.state()), "Your turn (X)");
        engine.apply_move(0).expect("legal move");
        assert_eq!(status_text(engine.state()), "Computer thinking...");
    }

    #[test]
    fn test_o_win_named_by_mode() {
        for (mode, expected) in [
            (GameMode::VsComputer, "Computer wins!"),
            (GameMode::TwoPlayer, "Player O wins!"),
        ] {
            let mut engine = GameEngine::new(mode);
            for index in [0, 3, 1, 4, 8, 5] {
                engine.apply_move(index).expect("legal move");
            }
            assert_eq!(status_text(engine.state()), expected);
        }
    }

    #[test]
    fn test_x_win_and_draw() {
        let mut engine = GameEngine::new(GameMode::VsComputer);
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(status_text(engine.state()), "Player X wins!");

        engine.reset(GameMode::TwoPlayer);
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(status_text(engine.state()), "It's a draw!");
    }
}
