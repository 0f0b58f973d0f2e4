//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties of a [`GameState`] that every legal
//! sequence of moves preserves. The engine checks them in debug builds after
//! each move, and tests use them directly.

use crate::rules::{check_winner, is_draw};
use crate::{GameState, GameStatus, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples; all members are checked and every failure is
/// reported, not only the first.
pub trait InvariantSet<S> {
    /// Returns `Ok(())` if all invariants hold, else every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// X moves first, so X has as many marks as O or one more.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// While the game runs, X is to move exactly when the counts are equal.
pub struct TurnMatchesBoard;

impl Invariant<GameState> for TurnMatchesBoard {
    fn holds(state: &GameState) -> bool {
        if state.status().is_terminal() {
            return true;
        }
        let even = state.board().count(Player::X) == state.board().count(Player::O);
        (state.current_player() == Player::X) == even
    }

    fn description() -> &'static str {
        "Player to move matches the marks on the board"
    }
}

/// The recorded status agrees with what the board shows.
pub struct StatusMatchesBoard;

impl Invariant<GameState> for StatusMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::Won(p) => {
                matches!(check_winner(board), Some((winner, _)) if winner == p)
                    && state.winning_line().is_some()
            }
            GameStatus::Draw => is_draw(board),
            GameStatus::InProgress => check_winner(board).is_none() && !board.is_full(),
        }
    }

    fn description() -> &'static str {
        "Status agrees with lines and free cells on the board"
    }
}

/// All game-state invariants as a composable set.
pub type GameInvariants = (MarkBalance, TurnMatchesBoard, StatusMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, GameEngine, GameMode};

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let engine = GameEngine::new(GameMode::TwoPlayer);
        assert!(GameInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new(GameMode::TwoPlayer);
        for index in [4, 0, 8] {
            engine.apply_move(index).expect("legal move");
        }
        assert!(GameInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_detects_every_violation() {
        // Two O marks and no X, with X still to move.
        let mut state = GameState::new(GameMode::TwoPlayer);
        *state.board_mut() = Board::from_cells([
            Cell::Occupied(Player::O),
            Cell::Occupied(Player::O),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MarkBalance::description());
        assert_eq!(violations[1].description, TurnMatchesBoard::description());
    }

    #[test]
    fn test_status_mismatch_detected() {
        let mut state = GameState::new(GameMode::TwoPlayer);
        state.finish(GameStatus::Won(Player::X), Some([0, 1, 2]));
        assert!(!StatusMatchesBoard::holds(&state));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalance, TurnMatchesBoard);
        let state = GameState::new(GameMode::VsComputer);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
