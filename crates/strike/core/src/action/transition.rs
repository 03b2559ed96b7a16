use crate::state::MatchState;

/// Defines how a concrete action variant moves the match state machine.
///
/// Implementors surface every precondition in `pre_validate` so that a
/// rejected action provably leaves state untouched; `apply` runs only after
/// validation succeeds and must not fail on a validated state. The optional
/// `post_validate` hook checks invariants on the mutated state.
pub trait MatchTransition {
    type Error;

    /// Validates preconditions against the state **before** mutation.
    fn pre_validate(&self, _state: &MatchState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the match state directly.
    /// Implementations may assume `pre_validate` has already passed.
    fn apply(&self, state: &mut MatchState) -> Result<(), Self::Error>;

    /// Validates invariants against the state **after** mutation.
    fn post_validate(&self, _state: &MatchState) -> Result<(), Self::Error> {
        Ok(())
    }
}
