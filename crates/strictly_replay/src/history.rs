//! Move history: one board snapshot per step.
//!
//! Entry `k` is the board after `k` moves; entry 0 is the empty starting
//! position. Entries are never edited. Branching off an earlier step
//! discards everything after it before the new entry is appended.

use crate::action::HistoryError;
use crate::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Column and row (both 1-indexed) of the cell a move was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Coordinates {
    /// Column, 1 to 3 from the left.
    column: u8,
    /// Row, 1 to 3 from the top.
    row: u8,
}

impl From<Position> for Coordinates {
    fn from(pos: Position) -> Self {
        Self {
            column: pos.column(),
            row: pos.row(),
        }
    }
}

impl Coordinates {
    /// The position these coordinates point at.
    pub fn position(&self) -> Option<Position> {
        let column = usize::from(self.column).checked_sub(1)?;
        let row = usize::from(self.row).checked_sub(1)?;
        if column >= 3 {
            return None;
        }
        Position::from_index(row * 3 + column)
    }
}

/// An immutable snapshot of the board after a move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    squares: Board,
    /// Where the move was played; `None` for the starting position.
    coordinates: Option<Coordinates>,
}

impl HistoryEntry {
    /// The empty starting position.
    pub fn start() -> Self {
        Self {
            squares: Board::new(),
            coordinates: None,
        }
    }

    /// An entry recording a move at `pos` that produced `squares`.
    pub fn after_move(squares: Board, pos: Position) -> Self {
        Self {
            squares,
            coordinates: Some(Coordinates::from(pos)),
        }
    }
}

/// Ordered sequence of history entries. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Unvalidated wire shape of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err(HistoryError::Empty);
        }
        Ok(Self {
            entries: raw.entries,
        })
    }
}

impl History {
    /// Creates a history holding only the starting position.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries, including the starting position.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction and deserialization both keep the start entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The last entry.
    pub fn last(&self) -> &HistoryEntry {
        // Never empty: `new` seeds the start entry, deserialization rejects an
        // empty list and truncation keeps at least one.
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`, keeping `step + 1` entries.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_after(&mut self, step: usize) {
        self.entries.truncate(step + 1);
    }

    /// Appends an entry and returns its step.
    pub fn push(&mut self, entry: HistoryEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
