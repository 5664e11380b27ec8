//! Frozen board invariant: nothing is played after a win.

use super::Invariant;
use crate::rules::find_winning_line;
use crate::GameState;

/// Invariant: only the last history entry may contain a winning line.
pub struct FrozenAfterWinInvariant;

impl Invariant<GameState> for FrozenAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();
        let before_last = entries.len().saturating_sub(1);
        entries[..before_last]
            .iter()
            .all(|entry| find_winning_line(entry.squares()).is_none())
    }

    fn description() -> &'static str {
        "A won board is never followed by another move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Player, Position};

    #[test]
    fn test_winning_game_holds() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
        ] {
            state.apply_move(pos);
        }
        assert!(state.winning_line().is_some());
        assert!(FrozenAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
        ] {
            state.apply_move(pos);
        }
        let board = state
            .current_board()
            .with_mark(Position::BottomRight, Player::O);
        state
            .history
            .push(HistoryEntry::after_move(board, Position::BottomRight));

        assert!(!FrozenAfterWinInvariant::holds(&state));
    }
}
