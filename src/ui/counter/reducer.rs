//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Never fails. Arithmetic saturates at the `i64` bounds.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::IncrementNumber { increment_by } => CounterState {
                number: state.number.saturating_add(increment_by),
                ..state
            },

            CounterIntent::ChangeIncrementBy { value } => match value {
                Some(increment_by) => CounterState {
                    increment_by,
                    ..state
                },
                None => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_adds_step_and_keeps_increment_by() {
        let state = CounterState::new(10, 2);
        let new = CounterReducer::reduce(state, CounterIntent::IncrementNumber { increment_by: 7 });
        assert_eq!(new, CounterState::new(17, 2));
    }

    #[test]
    fn increment_by_negative_step_decreases() {
        let new = CounterReducer::reduce(
            CounterState::default(),
            CounterIntent::IncrementNumber { increment_by: -3 },
        );
        assert_eq!(new.number, -3);
    }

    #[test]
    fn increment_saturates_at_max() {
        let state = CounterState::new(i64::MAX - 1, 1);
        let new = CounterReducer::reduce(state, CounterIntent::IncrementNumber { increment_by: 5 });
        assert_eq!(new.number, i64::MAX);
    }

    #[test]
    fn change_sets_step_and_keeps_number() {
        let state = CounterState::new(1, 1);
        let new =
            CounterReducer::reduce(state, CounterIntent::ChangeIncrementBy { value: Some(5) });
        assert_eq!(new, CounterState::new(1, 5));
    }

    #[test]
    fn change_without_value_is_noop() {
        let state = CounterState::new(8, 3);
        let new = CounterReducer::reduce(state, CounterIntent::ChangeIncrementBy { value: None });
        assert_eq!(new, state);
    }
}
