//! Terminal UI for the number incrementer.

pub mod app;
pub mod binding;
pub mod counter;
pub mod events;
pub mod footer;
pub mod header;
pub mod increment_field;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
