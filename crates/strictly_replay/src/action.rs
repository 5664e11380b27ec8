//! First-class intents and their outcomes.
//!
//! The view layer never mutates game state directly. It forwards user
//! intents, and the game state answers with what happened.

use crate::history::Coordinates;
use crate::{Position, Step};
use serde::{Deserialize, Serialize};

/// A user intent forwarded by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// A board cell (0-8) was clicked.
    #[display("click cell {}", _0)]
    CellClicked(usize),
    /// A move-list entry was selected.
    #[display("select step {}", _0)]
    HistoryStepSelected(Step),
    /// The move-list order button was pressed.
    #[display("toggle history order")]
    OrderToggleRequested,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winning line.
    #[display("game is already won")]
    GameOver,
    /// The target square holds a mark.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The clicked index is not a board cell.
    #[display("cell index {} is off the board", _0)]
    OutOfBounds(usize),
}

/// Result of a move attempt.
///
/// An ignored move leaves the state untouched. It is reported so callers
/// can log it, not because anything failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Applied {
        /// Step of the new entry.
        step: Step,
        /// Where the mark was placed.
        coordinates: Coordinates,
    },
    /// The move was dropped.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Error raised when navigating or loading history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested step is past the end of history.
    #[display("step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: Step,
        /// History length at the time of the request.
        len: usize,
    },
    /// A history without the starting position.
    #[display("history has no entries")]
    Empty,
}

/// Result of handling an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A cell click was handled.
    Move(MoveOutcome),
    /// A history selection was handled.
    Jump(Result<(), HistoryError>),
    /// The display order was flipped.
    OrderToggled,
}
