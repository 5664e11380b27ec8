//! Strictly Replay - tic-tac-toe with move history and time travel
//!
//! The crate holds the game-state machine behind a tic-tac-toe board that
//! remembers every move. A view layer forwards user intents and renders the
//! read model; nothing here performs I/O.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection over a board snapshot
//! - **History**: append-only board snapshots, truncated when a new move
//!   branches off an earlier step
//! - **Game**: the session state answering intents (move, jump, reorder)
//! - **View**: the serializable snapshot a renderer draws from
//!
//! # Example
//!
//! ```
//! use strictly_replay::{GameState, GameStatus, Intent, Player, Position};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.handle(Intent::CellClicked(cell));
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Travel back to the start and branch off.
//! game.jump_to(0).unwrap();
//! game.apply_move(Position::Center);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

/// Index into the move history; step `k` is the board after `k` moves.
pub type Step = usize;

/// Alias for clarity when talking about board contents.
pub type Mark = Player;

// Crate-level exports - Board primitives
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - History
pub use history::{Coordinates, History, HistoryEntry};

// Crate-level exports - Game state and intents
pub use action::{HistoryError, IgnoreReason, Intent, IntentOutcome, MoveOutcome};
pub use game::{GameState, GameStatus, HistoryOrder};
pub use rules::{check_winner, find_winning_line, WinningLine, LINES};

// Crate-level exports - Read model
pub use view::{GameView, MoveDescription};
