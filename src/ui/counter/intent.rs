//! Intents for the counter.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// Add `increment_by` to the number.
    ///
    /// Callers read the step from the live store state at the moment of
    /// the press, not from whatever was last rendered.
    IncrementNumber { increment_by: i64 },

    /// Replace the increment step.
    /// `None` means no value was supplied; the reducer leaves state as is.
    ChangeIncrementBy { value: Option<i64> },
}

impl Intent for CounterIntent {}
