//! UI-facing layer: panel state machine and controller.

pub mod mvi;
mod panel;
pub mod popover;

pub use panel::ConfigPanel;
