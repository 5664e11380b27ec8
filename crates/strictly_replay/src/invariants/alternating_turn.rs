//! Alternating turn invariant: X plays odd moves, O plays even moves.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: the mark placed by move `k` is X when `k` is odd, O otherwise.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                let expected = if step % 2 == 1 { Player::X } else { Player::O };
                entry
                    .coordinates()
                    .and_then(|c| c.position())
                    .is_some_and(|pos| entry.squares().get(pos) == Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}
