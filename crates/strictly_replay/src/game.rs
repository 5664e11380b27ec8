//! Replayable tic-tac-toe game state.
//!
//! `GameState` owns the full move history and a pointer into it. Moves
//! are played from the board at that pointer; jumping only moves the
//! pointer, and the next move after a jump discards the abandoned future.

use crate::action::{HistoryError, IgnoreReason, Intent, IntentOutcome, MoveOutcome};
use crate::history::{Coordinates, History, HistoryEntry};
use crate::invariants::{InvariantSet, InvariantViolation, ReplayInvariants, assert_invariants};
use crate::rules::{find_winning_line, WinningLine};
use crate::{Board, Player, Position, Step};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum HistoryOrder {
    /// Oldest move first.
    #[default]
    #[display("Asc")]
    Ascending,
    /// Newest move first.
    #[display("Desc")]
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// The board has a winning line for this player.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// No line yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Session game state.
///
/// Deserialized values are checked against [`ReplayInvariants`], so a
/// loaded state upholds the same guarantees as one built by moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step_number: Step,
    pub(crate) current_history_step: Option<Step>,
    pub(crate) history_order: HistoryOrder,
}

/// Unvalidated wire shape of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    step_number: Step,
    current_history_step: Option<Step>,
    history_order: HistoryOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step_number: raw.step_number,
            current_history_step: raw.current_history_step,
            history_order: raw.history_order,
        };
        ReplayInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejecting invalid game state");
            InvariantViolation::new(descriptions)
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a game holding only the empty starting position.
    #[instrument]
    pub fn new() -> Self {
        Self::with_history_order(HistoryOrder::default())
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_history_order(history_order: HistoryOrder) -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            current_history_step: None,
            history_order,
        }
    }

    /// The full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step of the board being shown and played from.
    pub fn step_number(&self) -> Step {
        self.step_number
    }

    /// Step last selected from the move list, if any.
    pub fn current_history_step(&self) -> Option<Step> {
        self.current_history_step
    }

    /// Display order of the move list.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }

    /// Whether the move list is shown oldest first.
    pub fn is_history_order_asc(&self) -> bool {
        self.history_order == HistoryOrder::Ascending
    }

    /// Whether X moves next. Derived from the step: X plays from even steps.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// The player who moves next from the displayed board.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// The entry at the current step.
    fn current_entry(&self) -> &HistoryEntry {
        // `step_number` always indexes into history; see `StepInRangeInvariant`.
        &self.history.entries()[self.step_number]
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_entry().squares()
    }

    /// The winning line on the current board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        match self.winning_line() {
            Some(line) => GameStatus::Won(line.player()),
            None => GameStatus::NextPlayer(self.next_player()),
        }
    }

    /// Plays the next mark at `pos` from the current step.
    ///
    /// Moves on a won board or an occupied square are ignored and leave
    /// the state untouched. Otherwise history after the current step is
    /// discarded and the new board appended.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = self.current_board();

        if find_winning_line(board).is_some() {
            debug!("Ignoring move on a won board");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Ignoring move on an occupied square");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next = board.with_mark(pos, player);
        let coordinates = Coordinates::from(pos);

        self.history.truncate_after(self.step_number);
        self.step_number = self.history.push(HistoryEntry::after_move(next, pos));
        debug!(%player, step = self.step_number, "Move applied");

        assert_invariants(self);
        MoveOutcome::Applied {
            step: self.step_number,
            coordinates,
        }
    }

    /// Shows the board at `step` without altering history.
    ///
    /// Steps past the end of history are rejected and leave the state
    /// untouched.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: Step) -> Result<(), HistoryError> {
        let len = self.history.len();
        if step >= len {
            warn!("Rejecting jump past the end of history");
            return Err(HistoryError::StepOutOfRange { step, len });
        }

        self.step_number = step;
        self.current_history_step = Some(step);
        debug!(next = %self.next_player(), "Jumped to step");

        assert_invariants(self);
        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_history_order(&mut self) {
        self.history_order = self.history_order.toggle();
        debug!(order = %self.history_order, "History order toggled");
    }

    /// Handles an intent forwarded from the view layer.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::CellClicked(index) => match Position::from_index(index) {
                Some(pos) => IntentOutcome::Move(self.apply_move(pos)),
                None => {
                    debug!("Ignoring click outside the board");
                    IntentOutcome::Move(MoveOutcome::Ignored(IgnoreReason::OutOfBounds(index)))
                }
            },
            Intent::HistoryStepSelected(step) => IntentOutcome::Jump(self.jump_to(step)),
            Intent::OrderToggleRequested => {
                self.toggle_history_order();
                IntentOutcome::OrderToggled
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.current_history_step(), None);
        assert!(state.is_history_order_asc());
        assert_eq!(state.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let mut state = GameState::new();
        assert!(state.apply_move(Position::Center).is_applied());
        assert_eq!(state.next_player(), Player::O);
        assert!(state.apply_move(Position::TopLeft).is_applied());

        assert_eq!(state.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.current_board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(state.step_number(), 2);
    }

    #[test]
    fn test_apply_move_reports_coordinates() {
        let mut state = GameState::new();
        match state.apply_move(Position::BottomRight) {
            MoveOutcome::Applied { step, coordinates } => {
                assert_eq!(step, 1);
                assert_eq!((*coordinates.column(), *coordinates.row()), (3, 3));
            }
            other => panic!("expected applied move, got {:?}", other),
        }
    }

    #[test]
    fn test_jump_recomputes_next_player() {
        let mut state = GameState::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            state.apply_move(pos);
        }
        state.jump_to(1).expect("step 1 exists");
        assert!(!state.x_is_next());
        state.jump_to(2).expect("step 2 exists");
        assert!(state.x_is_next());
        assert_eq!(state.history().len(), 4);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        let before = state.clone();

        assert_eq!(
            state.jump_to(2),
            Err(HistoryError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_handle_out_of_bounds_click() {
        let mut state = GameState::new();
        let outcome = state.handle(Intent::CellClicked(9));
        assert_eq!(
            outcome,
            IntentOutcome::Move(MoveOutcome::Ignored(IgnoreReason::OutOfBounds(9)))
        );
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_deserialize_roundtrip_of_played_game() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.apply_move(Position::TopLeft);
        state.jump_to(1).expect("step 1 exists");

        let json = serde_json::to_value(&state).expect("state serializes");
        let back: GameState = serde_json::from_value(json).expect("state deserializes");
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_rejects_step_past_end() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        let mut json = serde_json::to_value(&state).expect("state serializes");
        json["step_number"] = serde_json::json!(7);

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("Step pointers index into history"));
    }

    #[test]
    fn test_deserialize_rejects_dangling_selection() {
        let mut json = serde_json::to_value(GameState::new()).expect("state serializes");
        json["current_history_step"] = serde_json::json!(3);

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let mut json = serde_json::to_value(GameState::new()).expect("state serializes");
        json["history"]["entries"] = serde_json::json!([]);

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("history has no entries"));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_entries() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        let mut json = serde_json::to_value(&state).expect("state serializes");
        // Move recorded at the center but claiming the top-left cell.
        json["history"]["entries"][1]["coordinates"] = serde_json::json!({"column": 1, "row": 1});

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("exactly one mark"));
    }

    #[test]
    fn test_history_order_labels() {
        assert_eq!(HistoryOrder::Ascending.to_string(), "Asc");
        assert_eq!(HistoryOrder::Descending.to_string(), "Desc");
        assert_eq!(HistoryOrder::Ascending.toggle(), HistoryOrder::Descending);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::NextPlayer(Player::O).to_string(), "Next player: O");
    }
}
