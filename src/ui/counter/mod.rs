//! Counter feature module.
//!
//! Holds the number being incremented and the step it is incremented by.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `CounterState { number, increment_by }`
//! - `intent.rs` - User actions (IncrementNumber, ChangeIncrementBy)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
