//! Model-View-Intent (MVI) primitives.
//!
//! Base traits for unidirectional data flow in the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State
//! ```
//!
//! State is immutable, intents describe what happened, and the reducer
//! is the only place transitions occur.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
