//! Read model handed to the view layer for rendering.

use crate::game::{GameState, GameStatus, HistoryOrder};
use crate::history::Coordinates;
use crate::rules::WinningLine;
use crate::{Board, Step};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveDescription {
    /// Step this entry jumps to.
    step: Step,
    /// Where the move was played; `None` for the starting position.
    coordinates: Option<Coordinates>,
    /// Whether this is the step last selected from the move list.
    is_selected: bool,
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.step, self.coordinates) {
            (0, _) | (_, None) => write!(f, "Go to game start"),
            (step, Some(c)) => write!(
                f,
                "Go to move #{} (col: {}, row: {})",
                step,
                c.column(),
                c.row()
            ),
        }
    }
}

/// Immutable snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Line to highlight, if the board is won.
    winning_line: Option<WinningLine>,
    /// Winner or next player.
    status: GameStatus,
    /// Move list in display order.
    moves: Vec<MoveDescription>,
    /// Display order of `moves`.
    order: HistoryOrder,
}

impl GameView {
    /// Status line text, e.g. `Winner: X` or `Next player: O`.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Label for the order toggle, `Asc` or `Desc`.
    pub fn order_label(&self) -> String {
        self.order.to_string()
    }
}

impl From<&GameState> for GameView {
    #[instrument(skip(state), fields(step = state.step_number()))]
    fn from(state: &GameState) -> Self {
        let selected = state.current_history_step();
        let chronological = state
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveDescription {
                step,
                coordinates: *entry.coordinates(),
                is_selected: selected == Some(step),
            });

        // The canonical history is only read; reversal happens on the copy.
        let moves = match state.history_order() {
            HistoryOrder::Ascending => chronological.collect(),
            HistoryOrder::Descending => chronological.rev().collect(),
        };

        Self {
            board: state.current_board().clone(),
            winning_line: state.winning_line(),
            status: state.status(),
            moves,
            order: state.history_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_descriptions() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.apply_move(Position::BottomRight);

        let view = GameView::from(&state);
        let text: Vec<String> = view.moves().iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            [
                "Go to game start",
                "Go to move #1 (col: 2, row: 2)",
                "Go to move #2 (col: 3, row: 3)",
            ]
        );
    }

    #[test]
    fn test_descending_order_reverses_view_only() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft);
        state.apply_move(Position::TopCenter);
        state.toggle_history_order();

        let view = GameView::from(&state);
        let steps: Vec<Step> = view.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, [2, 1, 0]);
        assert_eq!(view.order_label(), "Desc");
        assert!(state.history().entries()[0].coordinates().is_none());
    }

    #[test]
    fn test_selected_step_is_marked() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft);
        state.apply_move(Position::TopCenter);
        state.jump_to(1).expect("step 1 exists");

        let view = GameView::from(&state);
        let selected: Vec<Step> = view
            .moves()
            .iter()
            .filter(|m| *m.is_selected())
            .map(|m| *m.step())
            .collect();
        assert_eq!(selected, [1]);
        assert_eq!(view.status_text(), "Next player: O");
    }
}
