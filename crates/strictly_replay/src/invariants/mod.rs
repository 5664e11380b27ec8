//! First-class invariants for the replayable game state.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are checked in debug builds and can be tested
//! independently.

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation
    /// found.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod frozen_after_win;
pub mod history_consistent;
pub mod step_in_range;

pub use alternating_turn::AlternatingTurnInvariant;
pub use frozen_after_win::FrozenAfterWinInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All game-state invariants as a composable set.
pub type ReplayInvariants = (
    StepInRangeInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    FrozenAfterWinInvariant,
);

/// Asserts that all invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = ReplayInvariants::check_all(state)
    {
        tracing::error!(?violations, "Game state invariants violated");
        panic!("game state invariants violated: {:?}", violations);
    }
}
