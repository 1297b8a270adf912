//! Base trait for UI state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (replaced wholesale by the reducer, never patched in place)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Debug + Default + Send + 'static {}
