//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_replay::{HistoryOrder, Position, Step};

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Moves the highlighted move-list entry with Up/Down.
///
/// Up and Down follow the list as displayed, so in descending order Up
/// goes to a later step.
pub fn move_selection(step: Step, len: usize, order: HistoryOrder, key: KeyCode) -> Step {
    let last = len.saturating_sub(1);
    let earlier = step.saturating_sub(1);
    let later = (step + 1).min(last);

    match (order, key) {
        (HistoryOrder::Ascending, KeyCode::Up) | (HistoryOrder::Descending, KeyCode::Down) => earlier,
        (HistoryOrder::Ascending, KeyCode::Down) | (HistoryOrder::Descending, KeyCode::Up) => later,
        (_, KeyCode::Home) => 0,
        (_, KeyCode::End) => last,
        _ => step.min(last),
    }
}
