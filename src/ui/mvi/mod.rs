//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer, plus the [`Store`] that owns a state value
//! and drives its reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ listeners ──→ View
//!    ↑                                                                 │
//!    └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Single owner of the state; notifies subscribers after each dispatch

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
