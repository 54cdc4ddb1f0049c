//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// `reduce` must be a pure function: `(State, Intent) -> State`, with
/// no side effects. Side effects live in whatever drives the reducer.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
