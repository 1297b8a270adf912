//! State for the counter.

use serde::Serialize;

use crate::ui::mvi::UiState;

/// The whole application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    /// Running total.
    pub number: i64,
    /// Step added to `number` on each increment.
    pub increment_by: i64,
}

impl CounterState {
    pub const fn new(number: i64, increment_by: i64) -> Self {
        Self {
            number,
            increment_by,
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl UiState for CounterState {}
