//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// A pure transition function `(State, Intent) -> State`.
///
/// Reducers own no data. The [`Store`](super::Store) calls them with the
/// current state by value and keeps whatever they return, so a reducer can
/// hand back its input untouched to express "nothing happens".
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Compute the next state. Must not fail or have side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents, left to right.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
