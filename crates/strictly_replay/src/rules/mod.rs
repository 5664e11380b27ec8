//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! kept apart from history bookkeeping so the game state can consult them
//! before accepting a move.

pub mod win;

pub use win::{check_winner, find_winning_line, WinningLine, LINES};
