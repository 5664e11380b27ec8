//! History consistency invariant: each entry is its predecessor plus one mark.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: history entries form a chain of single moves.
///
/// Entry 0 is an empty board without coordinates. Entry `k` holds exactly
/// `k` marks and differs from entry `k - 1` only in the cell its
/// coordinates name.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();

        let Some(start) = entries.first() else {
            return false;
        };
        if start.coordinates().is_some() || start.squares().mark_count() != 0 {
            return false;
        }

        entries.windows(2).enumerate().all(|(i, pair)| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.coordinates().and_then(|c| c.position()) else {
                return false;
            };
            let changed: Vec<_> = before
                .squares()
                .squares()
                .iter()
                .zip(after.squares().squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(index, _)| index)
                .collect();

            after.squares().mark_count() == i + 1
                && changed == [pos.to_index()]
                && before.squares().get(pos) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its recorded coordinates"
    }
}
