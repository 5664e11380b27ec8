//! Application state and key handling.
//!
//! Keys are translated into game intents here, so everything except the
//! drawing and the terminal loop can be exercised without a terminal.

use crate::input::{move_cursor, move_selection};
use crossterm::event::KeyCode;
use strictly_replay::{GameState, GameView, HistoryOrder, Intent, IntentOutcome, Position, Step};
use tracing::{debug, instrument, warn};

/// Pane receiving the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The move list.
    History,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    history_cursor: Step,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the move list in `order`.
    #[instrument]
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            game: GameState::with_history_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::from(&self.game)
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving the arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list step under the list cursor.
    pub fn history_cursor(&self) -> Step {
        self.history_cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press. Returns the outcome when the key became an intent.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) -> Option<IntentOutcome> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                None
            }
            KeyCode::Char('o') => Some(self.dispatch(Intent::OrderToggleRequested)),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                Some(self.dispatch(Intent::CellClicked(index)))
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let intent = match self.focus {
                    Focus::Board => Intent::CellClicked(self.cursor.to_index()),
                    Focus::History => Intent::HistoryStepSelected(self.history_cursor),
                };
                Some(self.dispatch(intent))
            }
            code => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => {
                        self.history_cursor = move_selection(
                            self.history_cursor,
                            self.game.history().len(),
                            self.game.history_order(),
                            code,
                        )
                    }
                }
                None
            }
        }
    }

    /// Forwards an intent to the game and logs what happened.
    fn dispatch(&mut self, intent: Intent) -> IntentOutcome {
        let outcome = self.game.handle(intent);
        match &outcome {
            IntentOutcome::Move(result) if result.is_applied() => {
                // Follow the newest entry so Enter in the list replays it.
                self.history_cursor = self.game.step_number();
                debug!(?result, "Move applied");
            }
            IntentOutcome::Move(result) => debug!(?result, "Move ignored"),
            IntentOutcome::Jump(Err(e)) => warn!(error = %e, "Jump rejected"),
            IntentOutcome::Jump(Ok(())) => debug!(step = self.game.step_number(), "Jumped"),
            IntentOutcome::OrderToggled => {
                debug!(order = %self.game.history_order(), "Order toggled")
            }
        }
        outcome
    }
}
