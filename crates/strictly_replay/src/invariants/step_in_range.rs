//! Step bounds invariant: every step pointer refers to an existing entry.

use super::Invariant;
use crate::GameState;

/// Invariant: `step_number` and the selected history step index into history.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        let len = state.history().len();
        state.step_number() < len && state.current_history_step().is_none_or(|step| step < len)
    }

    fn description() -> &'static str {
        "Step pointers index into history"
    }
}
