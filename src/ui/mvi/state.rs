//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: cloned to produce new states,
/// self-contained, and comparable so views can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
