//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent describes something that happened (a button press, an
/// edit, a rejected save). Reducers consume intents to produce new
/// states.
pub trait Intent: Send + 'static {}
